//! Registry mapping dotted check names to factories

use std::collections::BTreeMap;

use serde_yaml::Mapping;

use crate::core::error::{IntrospectionError, SpecResult};

/// Capability set a check implementation exposes to the pipeline.
///
/// A check is constructed from its declared parameters by a factory; the
/// pipeline then only ever asks it to describe itself. A failing
/// description is a build-breaking condition, so it is an error, not an
/// empty string.
pub trait CheckImpl: std::fmt::Debug {
  /// Human-readable description of what this check validates.
  ///
  /// The error value is a bare detail message; callers attach the check
  /// name when converting it into a fatal introspection error.
  fn description(&self) -> Result<String, String>;

  /// All response messages this check can emit, in declaration order
  fn messages(&self) -> Vec<String>;
}

/// Factory producing a check instance from its declared parameters
pub type CheckFactory = fn(&Mapping) -> SpecResult<Box<dyn CheckImpl>>;

/// Explicit name → factory registry, populated at startup
pub struct CheckRegistry {
  factories: BTreeMap<String, CheckFactory>,
}

impl CheckRegistry {
  /// Create an empty registry
  pub fn new() -> Self {
    Self {
      factories: BTreeMap::new(),
    }
  }

  /// Create a registry holding all built-in checks
  pub fn with_builtins() -> Self {
    let mut registry = Self::new();
    super::builtin::register_builtins(&mut registry);
    registry
  }

  /// Register a factory under a dotted check name.
  ///
  /// Re-registering a name replaces the previous factory.
  pub fn register(&mut self, name: impl Into<String>, factory: CheckFactory) {
    self.factories.insert(name.into(), factory);
  }

  /// Registered dotted names, sorted
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.factories.keys().map(String::as_str)
  }

  /// Instantiate the check registered under `name` with `parameters`.
  ///
  /// Unknown names fail fast with an introspection error.
  pub fn instantiate(&self, name: &str, parameters: &Mapping) -> SpecResult<Box<dyn CheckImpl>> {
    let factory = self.factories.get(name).ok_or_else(|| IntrospectionError::UnknownCheck {
      check_name: name.to_string(),
    })?;
    factory(parameters)
  }
}

impl Default for CheckRegistry {
  fn default() -> Self {
    Self::new()
  }
}
