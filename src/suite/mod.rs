//! Check-suite documents: model, include resolution and validation
//!
//! A suite document is a YAML mapping with a `suite_name` and an ordered
//! `checks` sequence. Before validation, `include` markers in the sequence
//! are spliced out by the include resolver; after validation each entry is
//! a typed `DeclaredCheck`.

pub mod includes;
pub mod validate;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

/// One compliance rule as declared in a suite document.
///
/// This is the "declared" form only: descriptions and response messages are
/// derived later by introspection into a separate `EnrichedCheck`, leaving
/// the declared record untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct DeclaredCheck {
  /// Dotted path naming the check implementation, e.g.
  /// `checklib.register.file_checks_register.FileSizeCheck`
  pub check_name: String,

  /// Constructor arguments for the implementation, possibly empty
  #[serde(default)]
  pub parameters: Mapping,

  #[serde(default)]
  pub check_id: Option<Value>,

  #[serde(default)]
  pub check_level: Option<Value>,

  #[serde(default)]
  pub comments: Option<Value>,

  /// Any remaining keys; reported as unrecognized during validation
  #[serde(flatten, default)]
  pub extras: Mapping,
}

impl DeclaredCheck {
  /// Look up a declared attribute by its column key
  pub fn attribute(&self, key: &str) -> Option<&Value> {
    match key {
      "check_id" => self.check_id.as_ref(),
      "check_level" => self.check_level.as_ref(),
      "comments" => self.comments.as_ref(),
      _ => None,
    }
  }

  /// Short class name, i.e. the last segment of the dotted check name
  pub fn class_name(&self) -> &str {
    self.check_name.rsplit('.').next().unwrap_or(&self.check_name)
  }

  /// Module path of the dotted check name with `/` separators, empty when
  /// the name has no module prefix
  pub fn module_path(&self) -> String {
    match self.check_name.rsplit_once('.') {
      Some((module, _)) => module.replace('.', "/"),
      None => String::new(),
    }
  }
}

/// A validated, fully resolved check suite
#[derive(Debug, Clone)]
pub struct SuiteDocument {
  pub suite_name: String,
  pub checks: Vec<DeclaredCheck>,
}
