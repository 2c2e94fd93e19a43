//! The write command: the whole pipeline, front to back
//!
//! Sequence: load+validate project metadata, then per suite file load →
//! resolve includes → validate → enrich each check and format its row,
//! then assemble the rendering context and write the document. Any fatal
//! error unwinds before the output file is created, so no partial document
//! is ever written.

use std::fs;
use std::path::PathBuf;

use crate::checks::{enrich, CheckRegistry};
use crate::core::diagnostics::Diagnostics;
use crate::core::error::{ResultExt, SpecResult, ValidationError};
use crate::core::metadata::load_metadata;
use crate::links::CheckLibIndex;
use crate::loader;
use crate::render::{format_row, render_document, RenderContext, SuiteSection};
use crate::suite::{includes, validate};

/// Resolved command-line options for the write pipeline
#[derive(Debug, Clone)]
pub struct WriteOptions {
  pub project_metadata: PathBuf,
  pub output: PathBuf,
  pub suite_files: Vec<PathBuf>,
  pub check_lib_dir: PathBuf,
  pub check_lib_repo: String,
}

/// Run the pipeline and write the specification document.
///
/// With zero suite files this prints an informational message and returns
/// success without creating the output file.
pub fn run_write(opts: &WriteOptions, registry: &CheckRegistry, diag: &mut Diagnostics) -> SpecResult<()> {
  if opts.suite_files.is_empty() {
    println!("No check suite files given");
    return Ok(());
  }

  let metadata = load_metadata(&opts.project_metadata, diag)?;
  let index = CheckLibIndex::new(&opts.check_lib_dir, &opts.check_lib_repo);

  let mut suites: Vec<SuiteSection> = Vec::with_capacity(opts.suite_files.len());

  for file in &opts.suite_files {
    let mut doc = loader::load_yaml_file(file)?;
    includes::resolve_includes(&mut doc, file)?;
    let suite = validate::validate_suite(&doc, file, diag)?;

    if suites.iter().any(|s| s.name == suite.suite_name) {
      return Err(
        ValidationError::DuplicateSuite {
          suite_name: suite.suite_name,
        }
        .into(),
      );
    }

    let mut rows = Vec::with_capacity(suite.checks.len());
    for declared in suite.checks {
      let enriched = enrich(declared, registry)?;
      rows.push(format_row(&enriched, &index, diag));
    }

    suites.push(SuiteSection {
      name: suite.suite_name,
      rows,
    });
  }

  let document = render_document(&RenderContext {
    metadata: &metadata,
    suites,
  });

  fs::write(&opts.output, document)
    .with_context(|| format!("Failed to write output document to {}", opts.output.display()))?;

  Ok(())
}
