//! YAML document loading
//!
//! Both the project-metadata file and every check-suite file go through the
//! same loader: read the file, parse it as a single YAML document, and
//! surface any syntax problem as a fatal `ParseError` carrying the source
//! file and the parser diagnostic.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::core::error::{ParseError, SpecError, SpecResult};

/// Read and parse one YAML document from a file
pub fn load_yaml_file(path: &Path) -> SpecResult<Value> {
  let content = fs::read_to_string(path)?;
  parse_yaml(&content, path)
}

/// Parse one YAML document, attributing failures to `source`
pub fn parse_yaml(content: &str, source: &Path) -> SpecResult<Value> {
  serde_yaml::from_str(content).map_err(|e| {
    SpecError::Parse(ParseError {
      file: source.to_path_buf(),
      cause: e.to_string(),
    })
  })
}
