//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Metadata document carrying all six required keys
pub const VALID_METADATA: &str = "canonicalName: esacci\n\
                                  label: ESA CCI\n\
                                  description: Climate data checks\n\
                                  vocab_authority: ceda\n\
                                  vocab_scope: cci\n\
                                  checks_version: '1.0'\n";

/// A test project directory with metadata, suite files and a fake
/// check-library checkout
pub struct TestProject {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestProject {
  /// Create a project with valid metadata and an empty check-lib checkout
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    std::fs::write(path.join("metadata.yml"), VALID_METADATA)?;
    std::fs::create_dir_all(path.join("check-lib/checklib/register"))?;
    std::fs::create_dir_all(path.join("check-lib/checklib/test"))?;

    Ok(Self { _root: root, path })
  }

  /// Create a project whose check-lib checkout contains the FileSizeCheck
  /// source (class on line 4) and a matching unit-test module
  pub fn with_populated_check_lib() -> Result<Self> {
    let project = Self::new()?;

    project.write_file(
      "check-lib/checklib/register/file_checks_register.py",
      "import os\n\n\nclass FileSizeCheck(CallableCheckBase):\n    pass\n",
    )?;
    project.write_file(
      "check-lib/checklib/test/test_file_checks.py",
      "import pytest\n\ndef test_FileSizeCheck_success():\n    pass\n",
    )?;

    Ok(project)
  }

  /// Write a file relative to the project root, creating parent dirs
  pub fn write_file(&self, rel: &str, content: &str) -> Result<PathBuf> {
    let path = self.path.join(rel);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
  }

  pub fn read_file(&self, rel: &str) -> Result<String> {
    let path = self.path.join(rel);
    std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
  }

  pub fn file_exists(&self, rel: &str) -> bool {
    self.path.join(rel).exists()
  }

  /// Default arguments: metadata, output and check-lib flags
  pub fn base_args(&self) -> Vec<String> {
    vec![
      "--project-metadata".to_string(),
      "metadata.yml".to_string(),
      "--output".to_string(),
      "spec.html".to_string(),
      "--check-lib-dir".to_string(),
      "check-lib".to_string(),
      "--check-lib-repo".to_string(),
      "https://example.com/check-lib".to_string(),
    ]
  }
}

/// Run the checkspec binary, requiring success
pub fn run_checkspec(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = spawn_checkspec(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "checkspec command failed: checkspec {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run the checkspec binary, requiring a non-zero exit
pub fn run_checkspec_expect_failure(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = spawn_checkspec(cwd, args)?;

  if output.status.success() {
    anyhow::bail!("checkspec unexpectedly succeeded: checkspec {}", args.join(" "));
  }

  Ok(output)
}

fn spawn_checkspec(cwd: &Path, args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_checkspec");

  Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run checkspec")
}
