//! Project metadata loading and schema validation
//!
//! The project-metadata document is a flat YAML mapping describing the
//! project a specification is being written for. Six keys are required,
//! `url` is optional, and anything else is tolerated with a warning.

use std::path::Path;

use serde_yaml::Value;

use crate::core::diagnostics::Diagnostics;
use crate::core::error::{SpecResult, ValidationError};
use crate::loader;
use crate::utils::yaml_display;

/// Keys that must be present in the project-metadata document
pub const REQUIRED_KEYS: [&str; 6] = [
  "canonicalName",
  "label",
  "description",
  "vocab_authority",
  "vocab_scope",
  "checks_version",
];

/// Keys that may be present in addition to the required ones
pub const OPTIONAL_KEYS: [&str; 1] = ["url"];

/// Validated project metadata, read-only for the rest of the run
#[derive(Debug, Clone)]
pub struct ProjectMetadata {
  pub canonical_name: String,
  pub label: String,
  pub description: String,
  pub vocab_authority: String,
  pub vocab_scope: String,
  pub checks_version: String,
  pub url: Option<String>,
}

/// Validate the metadata document shape.
///
/// Fails naming the first missing required key. Unrecognized keys are
/// reported to `diag` and otherwise ignored.
pub fn validate_metadata(doc: &Value, diag: &mut Diagnostics) -> SpecResult<()> {
  let mapping = doc.as_mapping().ok_or_else(|| {
    ValidationError::BadShape {
      field: "project metadata".to_string(),
      expected: "a mapping of metadata keys".to_string(),
    }
  })?;

  for key in REQUIRED_KEYS {
    if !mapping.contains_key(key) {
      return Err(
        ValidationError::MissingKey {
          key: key.to_string(),
          file: None,
        }
        .into(),
      );
    }
  }

  for key in mapping.keys() {
    let name = yaml_display(key);
    if !REQUIRED_KEYS.contains(&name.as_str()) && !OPTIONAL_KEYS.contains(&name.as_str()) {
      diag.warn(format!("key '{}' not recognised in project metadata", name));
    }
  }

  Ok(())
}

/// Validate `doc` and convert it into typed metadata
pub fn parse_metadata(doc: &Value, diag: &mut Diagnostics) -> SpecResult<ProjectMetadata> {
  validate_metadata(doc, diag)?;

  let field = |key: &str| yaml_display(&doc[key]);

  Ok(ProjectMetadata {
    canonical_name: field("canonicalName"),
    label: field("label"),
    description: field("description"),
    vocab_authority: field("vocab_authority"),
    vocab_scope: field("vocab_scope"),
    checks_version: field("checks_version"),
    url: doc.get("url").map(yaml_display).filter(|u| !u.is_empty()),
  })
}

/// Load, validate and convert the project-metadata file
pub fn load_metadata(path: &Path, diag: &mut Diagnostics) -> SpecResult<ProjectMetadata> {
  let doc = loader::load_yaml_file(path)?;
  parse_metadata(&doc, diag)
}
