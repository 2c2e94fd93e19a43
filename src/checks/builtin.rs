//! Built-in check implementations
//!
//! These mirror the check families of the external check library that the
//! reference resolver links against: file-level checks and NetCDF
//! header/variable checks. Each factory validates its declared parameters
//! up front; a missing or malformed parameter is a fatal introspection
//! error for the whole run.

use serde_yaml::{Mapping, Value};

use crate::core::error::{IntrospectionError, SpecResult};
use crate::utils::yaml_display;

use super::registry::{CheckImpl, CheckRegistry};

pub(super) fn register_builtins(registry: &mut CheckRegistry) {
  registry.register(
    "checklib.register.file_checks_register.FileSizeCheck",
    FileSizeCheck::factory,
  );
  registry.register(
    "checklib.register.file_checks_register.FileNameStructureCheck",
    FileNameStructureCheck::factory,
  );
  registry.register(
    "checklib.register.nc_file_checks_register.GlobalAttrRegexCheck",
    GlobalAttrRegexCheck::factory,
  );
  registry.register(
    "checklib.register.nc_file_checks_register.GlobalAttrVocabCheck",
    GlobalAttrVocabCheck::factory,
  );
  registry.register(
    "checklib.register.nc_file_checks_register.VariableRangeCheck",
    VariableRangeCheck::factory,
  );
}

// Parameter extraction helpers. The check name in the error is filled in by
// each factory so messages always identify the offending record.

fn bad_parameters(check_name: &str, detail: impl Into<String>) -> IntrospectionError {
  IntrospectionError::BadParameters {
    check_name: check_name.to_string(),
    detail: detail.into(),
  }
}

fn require_string(params: &Mapping, key: &str, check_name: &str) -> SpecResult<String> {
  match params.get(key) {
    Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
    Some(_) => Err(bad_parameters(check_name, format!("parameter '{}' must be a non-empty string", key)).into()),
    None => Err(bad_parameters(check_name, format!("required parameter '{}' is missing", key)).into()),
  }
}

fn require_number(params: &Mapping, key: &str, check_name: &str) -> SpecResult<f64> {
  match params.get(key) {
    Some(Value::Number(n)) => n
      .as_f64()
      .ok_or_else(|| bad_parameters(check_name, format!("parameter '{}' is not a finite number", key)).into()),
    Some(_) => Err(bad_parameters(check_name, format!("parameter '{}' must be a number", key)).into()),
    None => Err(bad_parameters(check_name, format!("required parameter '{}' is missing", key)).into()),
  }
}

/// Display form of a declared numeric parameter (keeps `4` as "4", not "4.0")
fn number_display(params: &Mapping, key: &str) -> String {
  params.get(key).map(yaml_display).unwrap_or_default()
}

/// Data file stays under a size threshold (in Mbytes)
#[derive(Debug)]
struct FileSizeCheck {
  threshold: String,
}

impl FileSizeCheck {
  const NAME: &'static str = "checklib.register.file_checks_register.FileSizeCheck";

  fn factory(params: &Mapping) -> SpecResult<Box<dyn CheckImpl>> {
    let value = require_number(params, "threshold", Self::NAME)?;
    if value <= 0.0 {
      return Err(bad_parameters(Self::NAME, "parameter 'threshold' must be positive").into());
    }
    Ok(Box::new(Self {
      threshold: number_display(params, "threshold"),
    }))
  }
}

impl CheckImpl for FileSizeCheck {
  fn description(&self) -> Result<String, String> {
    Ok(format!("Data file is no larger than {} Mbytes.", self.threshold))
  }

  fn messages(&self) -> Vec<String> {
    vec![format!("Data file exceeds the size limit of {} Mbytes.", self.threshold)]
  }
}

/// File name is a delimited sequence of facets with a fixed extension
#[derive(Debug)]
struct FileNameStructureCheck {
  delimiter: String,
  extension: String,
}

impl FileNameStructureCheck {
  const NAME: &'static str = "checklib.register.file_checks_register.FileNameStructureCheck";

  fn factory(params: &Mapping) -> SpecResult<Box<dyn CheckImpl>> {
    Ok(Box::new(Self {
      delimiter: require_string(params, "delimiter", Self::NAME)?,
      extension: require_string(params, "extension", Self::NAME)?,
    }))
  }
}

impl CheckImpl for FileNameStructureCheck {
  fn description(&self) -> Result<String, String> {
    Ok(format!(
      "File names consist of facets separated by '{}', ending in '{}'.",
      self.delimiter, self.extension
    ))
  }

  fn messages(&self) -> Vec<String> {
    vec![
      format!("File name does not match the expected '{}'-separated structure.", self.delimiter),
      format!("File name does not end in '{}'.", self.extension),
    ]
  }
}

/// A global attribute exists and matches a regular expression
#[derive(Debug)]
struct GlobalAttrRegexCheck {
  attribute: String,
  regex: String,
}

impl GlobalAttrRegexCheck {
  const NAME: &'static str = "checklib.register.nc_file_checks_register.GlobalAttrRegexCheck";

  fn factory(params: &Mapping) -> SpecResult<Box<dyn CheckImpl>> {
    let regex = require_string(params, "regex", Self::NAME)?;
    if regex::Regex::new(&regex).is_err() {
      return Err(bad_parameters(Self::NAME, format!("parameter 'regex' is not a valid regular expression: {}", regex)).into());
    }
    Ok(Box::new(Self {
      attribute: require_string(params, "attribute", Self::NAME)?,
      regex,
    }))
  }
}

impl CheckImpl for GlobalAttrRegexCheck {
  fn description(&self) -> Result<String, String> {
    Ok(format!(
      "Checks the global attribute '{}' matches the regular expression '{}'.",
      self.attribute, self.regex
    ))
  }

  fn messages(&self) -> Vec<String> {
    vec![
      format!("'{}' global attribute is not present.", self.attribute),
      format!(
        "'{}' global attribute value does not match the regular expression '{}'.",
        self.attribute, self.regex
      ),
    ]
  }
}

/// A global attribute takes a value from a controlled vocabulary
#[derive(Debug)]
struct GlobalAttrVocabCheck {
  attribute: String,
  vocabulary_ref: String,
}

impl GlobalAttrVocabCheck {
  const NAME: &'static str = "checklib.register.nc_file_checks_register.GlobalAttrVocabCheck";

  fn factory(params: &Mapping) -> SpecResult<Box<dyn CheckImpl>> {
    Ok(Box::new(Self {
      attribute: require_string(params, "attribute", Self::NAME)?,
      vocabulary_ref: require_string(params, "vocabulary_ref", Self::NAME)?,
    }))
  }
}

impl CheckImpl for GlobalAttrVocabCheck {
  fn description(&self) -> Result<String, String> {
    Ok(format!(
      "Checks the global attribute '{}' takes a value from the controlled vocabulary '{}'.",
      self.attribute, self.vocabulary_ref
    ))
  }

  fn messages(&self) -> Vec<String> {
    vec![
      format!("'{}' global attribute is not present.", self.attribute),
      format!(
        "'{}' global attribute value is not in the controlled vocabulary '{}'.",
        self.attribute, self.vocabulary_ref
      ),
    ]
  }
}

/// A variable's values stay within a closed range
#[derive(Debug)]
struct VariableRangeCheck {
  variable: String,
  minimum: String,
  maximum: String,
}

impl VariableRangeCheck {
  const NAME: &'static str = "checklib.register.nc_file_checks_register.VariableRangeCheck";

  fn factory(params: &Mapping) -> SpecResult<Box<dyn CheckImpl>> {
    let minimum = require_number(params, "minimum", Self::NAME)?;
    let maximum = require_number(params, "maximum", Self::NAME)?;
    if minimum > maximum {
      return Err(bad_parameters(Self::NAME, "parameter 'minimum' is greater than 'maximum'").into());
    }
    Ok(Box::new(Self {
      variable: require_string(params, "variable", Self::NAME)?,
      minimum: number_display(params, "minimum"),
      maximum: number_display(params, "maximum"),
    }))
  }
}

impl CheckImpl for VariableRangeCheck {
  fn description(&self) -> Result<String, String> {
    Ok(format!(
      "Checks the variable '{}' only takes values in the range [{}, {}].",
      self.variable, self.minimum, self.maximum
    ))
  }

  fn messages(&self) -> Vec<String> {
    vec![
      format!("Variable '{}' is not present.", self.variable),
      format!(
        "Variable '{}' has values outside the range [{}, {}].",
        self.variable, self.minimum, self.maximum
      ),
    ]
  }
}
