//! Best-effort cross-referencing against the external check library
//!
//! The specification document links every check to its Python source line
//! and unit-test module in a sibling checkout of the check library. That
//! checkout is outside the validated inputs, so every lookup here degrades
//! to a placeholder on failure: one warning in the diagnostics, never an
//! error. The whole coupling is kept behind this one interface so it can
//! be swapped for a structured index without touching formatting logic.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::core::diagnostics::Diagnostics;

/// Default location of the check-library checkout, relative to the cwd
pub const DEFAULT_CHECK_LIB_DIR: &str = "../compliance-check-lib";

/// Default browsable repository for the check library
pub const DEFAULT_CHECK_LIB_REPO: &str = "https://github.com/cedadev/compliance-check-lib";

/// Glob (relative to the checkout) of unit-test candidate modules
const TEST_MODULE_GLOB: &str = "checklib/test/test_*.py";

/// Resolves source lines and unit tests for check classes in an external
/// check-library checkout
pub struct CheckLibIndex {
  checkout_dir: PathBuf,
  repo_url: String,
}

impl CheckLibIndex {
  pub fn new(checkout_dir: impl Into<PathBuf>, repo_url: impl Into<String>) -> Self {
    Self {
      checkout_dir: checkout_dir.into(),
      repo_url: repo_url.into(),
    }
  }

  /// Find the 1-based line of `class <class_name>` (at column zero) in the
  /// module's source file. Failures degrade to `None` with one warning.
  pub fn locate_definition(&self, module: &str, class_name: &str, diag: &mut Diagnostics) -> Option<u32> {
    let source = self.checkout_dir.join(format!("{}.py", module));
    match scan_for_class(&source, class_name) {
      Ok(Some(line)) => Some(line),
      Ok(None) => {
        diag.warn(format!(
          "failed to get check URL: class '{}' not found in '{}'",
          class_name,
          source.display()
        ));
        None
      }
      Err(e) => {
        diag.warn(format!("failed to get check URL: {}: {}", source.display(), e));
        None
      }
    }
  }

  /// Browsable URL for a check class. Produced even when the line is
  /// unknown; the fragment is then empty.
  pub fn check_url(&self, module: &str, line: Option<u32>) -> String {
    let fragment = line.map(|n| n.to_string()).unwrap_or_default();
    format!("{}/blob/master/{}.py#L{}", self.repo_url, module, fragment)
  }

  /// Find the unit-test module whose content defines a test function
  /// referencing `class_name`. Candidates are scanned in sorted file
  /// order, then line order; the first match wins.
  pub fn locate_test(&self, class_name: &str, diag: &mut Diagnostics) -> Option<String> {
    match self.scan_test_candidates(class_name) {
      Some(module) => Some(module),
      None => {
        diag.warn(format!("could not locate unit test for: {}", class_name));
        None
      }
    }
  }

  /// Browsable URL for a located unit-test module
  pub fn test_url(&self, module_name: &str) -> String {
    format!("{}/blob/master/checklib/test/{}", self.repo_url, module_name)
  }

  fn scan_test_candidates(&self, class_name: &str) -> Option<String> {
    let pattern = self.checkout_dir.join(TEST_MODULE_GLOB);
    let matcher = Regex::new(&format!("^def .*{}", regex::escape(class_name))).ok()?;

    let candidates = glob::glob(&pattern.to_string_lossy()).ok()?;
    for candidate in candidates.flatten() {
      if file_has_match(&candidate, &matcher) {
        return candidate.file_name().map(|n| n.to_string_lossy().into_owned());
      }
    }
    None
  }
}

fn scan_for_class(source: &Path, class_name: &str) -> std::io::Result<Option<u32>> {
  let needle = format!("class {}", class_name);
  let reader = BufReader::new(File::open(source)?);

  for (n, line) in reader.lines().enumerate() {
    if line?.starts_with(&needle) {
      return Ok(Some(n as u32 + 1));
    }
  }
  Ok(None)
}

fn file_has_match(path: &Path, matcher: &Regex) -> bool {
  let Ok(file) = File::open(path) else {
    return false;
  };
  BufReader::new(file)
    .lines()
    .map_while(Result::ok)
    .any(|line| matcher.is_match(&line))
}
