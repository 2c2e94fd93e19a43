//! Pure transformation from declared to enriched check records

use crate::core::error::{IntrospectionError, SpecResult};
use crate::suite::DeclaredCheck;

use super::registry::CheckRegistry;

/// A declared check joined with the data introspected from its
/// implementation. The declared record is kept intact rather than mutated.
#[derive(Debug, Clone)]
pub struct EnrichedCheck {
  pub declared: DeclaredCheck,
  /// Description reported by the instantiated implementation
  pub description: String,
  /// Response messages in order; the zero-based position is the response
  /// index shown in the document
  pub responses: Vec<String>,
}

/// Resolve, instantiate and introspect one declared check.
///
/// Any failure here is fatal for the whole run: a check definition that
/// cannot be described is a build-breaking condition, not a soft warning.
pub fn enrich(declared: DeclaredCheck, registry: &CheckRegistry) -> SpecResult<EnrichedCheck> {
  let implementation = registry.instantiate(&declared.check_name, &declared.parameters)?;

  let description = implementation.description().map_err(|detail| IntrospectionError::Description {
    check_name: declared.check_name.clone(),
    detail,
  })?;
  let responses = implementation.messages();

  Ok(EnrichedCheck {
    declared,
    description,
    responses,
  })
}
