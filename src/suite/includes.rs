//! Include resolution for check-suite documents
//!
//! A suite's `checks` sequence may contain include markers of the form
//! `{ include: relative/path.yml }`. Resolution replaces each marker, in
//! place, with the referenced file's fully resolved `checks` sequence, so
//! the final flattened order is the pre-order depth-first expansion of the
//! include graph. Paths are resolved relative to the file that declares
//! them. Re-entering a file that is still being resolved is a fatal error
//! rather than unbounded recursion.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::core::error::{SpecError, SpecResult, ValidationError};
use crate::loader;

/// Key marking a sequence entry as an include directive
const INCLUDE_KEY: &str = "include";

/// Resolve all include markers in `doc`, which was loaded from `file`.
///
/// Post-condition: no include markers remain anywhere in the `checks`
/// sequence.
pub fn resolve_includes(doc: &mut Value, file: &Path) -> SpecResult<()> {
  let base_dir = file.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
  let mut in_progress = Vec::new();
  if let Ok(canon) = fs::canonicalize(file) {
    in_progress.push(canon);
  }
  resolve_in_doc(doc, &base_dir, &mut in_progress)
}

fn resolve_in_doc(doc: &mut Value, base_dir: &Path, in_progress: &mut Vec<PathBuf>) -> SpecResult<()> {
  let Some(checks) = doc.get_mut("checks").and_then(Value::as_sequence_mut) else {
    // Shape problems are reported by validation, which runs afterwards
    return Ok(());
  };

  let entries = std::mem::take(checks);
  let mut resolved = Vec::with_capacity(entries.len());

  for entry in entries {
    match include_target(&entry) {
      Some(rel_path) => {
        let target = base_dir.join(&rel_path);
        let spliced = resolve_one_include(&target, in_progress)?;
        resolved.extend(spliced);
      }
      None => resolved.push(entry),
    }
  }

  *checks = resolved;
  Ok(())
}

fn resolve_one_include(target: &Path, in_progress: &mut Vec<PathBuf>) -> SpecResult<Vec<Value>> {
  let canon = fs::canonicalize(target)
    .map_err(|e| SpecError::message(format!("Failed to resolve include '{}': {}", target.display(), e)))?;

  if in_progress.contains(&canon) {
    return Err(ValidationError::IncludeCycle { file: canon }.into());
  }

  in_progress.push(canon);
  let mut included = loader::load_yaml_file(target)?;
  let included_dir = target.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
  resolve_in_doc(&mut included, &included_dir, in_progress)?;
  in_progress.pop();

  let checks = included
    .get_mut("checks")
    .and_then(Value::as_sequence_mut)
    .ok_or_else(|| ValidationError::BadShape {
      field: format!("checks in included file '{}'", target.display()),
      expected: "a sequence of check records".to_string(),
    })?;

  Ok(std::mem::take(checks))
}

/// Return the relative path if `entry` is an include marker
fn include_target(entry: &Value) -> Option<String> {
  let mapping = entry.as_mapping()?;
  if mapping.len() != 1 {
    return None;
  }
  mapping.get(INCLUDE_KEY).and_then(Value::as_str).map(str::to_string)
}
