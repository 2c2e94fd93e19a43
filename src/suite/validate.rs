//! Schema validation for resolved check-suite documents
//!
//! Runs strictly after include resolution: the document must be a mapping
//! with a string `suite_name` and a `checks` sequence of check records,
//! each carrying a `check_name`. Unrecognized keys are downgraded to
//! warnings.

use std::path::Path;

use serde_yaml::Value;

use crate::core::diagnostics::Diagnostics;
use crate::core::error::{SpecResult, ValidationError};
use crate::suite::{DeclaredCheck, SuiteDocument};
use crate::utils::yaml_display;

/// Top-level keys a suite document is expected to carry
const SUITE_KEYS: [&str; 2] = ["suite_name", "checks"];

/// Validate a resolved suite document and convert it into typed form
pub fn validate_suite(doc: &Value, file: &Path, diag: &mut Diagnostics) -> SpecResult<SuiteDocument> {
  let mapping = doc.as_mapping().ok_or_else(|| ValidationError::BadShape {
    field: format!("suite document '{}'", file.display()),
    expected: "a mapping with 'suite_name' and 'checks'".to_string(),
  })?;

  let suite_name = match mapping.get("suite_name") {
    None => {
      return Err(
        ValidationError::MissingKey {
          key: "suite_name".to_string(),
          file: Some(file.to_path_buf()),
        }
        .into(),
      );
    }
    Some(Value::String(name)) => name.clone(),
    Some(_) => {
      return Err(
        ValidationError::BadShape {
          field: "suite_name".to_string(),
          expected: "a string".to_string(),
        }
        .into(),
      );
    }
  };

  let checks_value = mapping.get("checks").ok_or_else(|| ValidationError::MissingKey {
    key: "checks".to_string(),
    file: Some(file.to_path_buf()),
  })?;
  let entries = checks_value.as_sequence().ok_or_else(|| ValidationError::BadShape {
    field: "checks".to_string(),
    expected: "a sequence of check records".to_string(),
  })?;

  for key in mapping.keys() {
    let name = yaml_display(key);
    if !SUITE_KEYS.contains(&name.as_str()) {
      diag.warn(format!("key '{}' not recognised in suite '{}'", name, suite_name));
    }
  }

  let mut checks = Vec::with_capacity(entries.len());
  for (position, entry) in entries.iter().enumerate() {
    checks.push(validate_check(entry, position, file, diag)?);
  }

  Ok(SuiteDocument { suite_name, checks })
}

fn validate_check(
  entry: &Value,
  position: usize,
  file: &Path,
  diag: &mut Diagnostics,
) -> SpecResult<DeclaredCheck> {
  let mapping = entry.as_mapping().ok_or_else(|| ValidationError::BadShape {
    field: format!("checks[{}] in '{}'", position, file.display()),
    expected: "a mapping describing one check".to_string(),
  })?;

  if !mapping.contains_key("check_name") {
    return Err(
      ValidationError::MissingKey {
        key: format!("check_name (checks[{}])", position),
        file: Some(file.to_path_buf()),
      }
      .into(),
    );
  }

  let check: DeclaredCheck =
    serde_yaml::from_value(entry.clone()).map_err(|e| ValidationError::BadShape {
      field: format!("checks[{}] in '{}'", position, file.display()),
      expected: format!("a well-formed check record ({})", e),
    })?;

  for key in check.extras.keys() {
    diag.warn(format!(
      "key '{}' not recognised in check '{}'",
      yaml_display(key),
      check.check_name
    ));
  }

  Ok(check)
}
