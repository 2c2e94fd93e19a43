//! Non-fatal warning collection
//!
//! Degraded lookups and unrecognized fields never abort the run. Instead of
//! writing to stderr at the point of detection, components record warnings
//! in a `Diagnostics` value threaded through the pipeline; the CLI layer
//! decides when to flush them. This keeps warning content testable.

/// Ordered collection of non-fatal warnings raised during a run
#[derive(Debug, Default)]
pub struct Diagnostics {
  warnings: Vec<String>,
}

impl Diagnostics {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record a warning
  pub fn warn(&mut self, message: impl Into<String>) {
    self.warnings.push(message.into());
  }

  /// All warnings recorded so far, in emission order
  pub fn warnings(&self) -> &[String] {
    &self.warnings
  }

  pub fn is_empty(&self) -> bool {
    self.warnings.is_empty()
  }

  /// Write all warnings to stderr
  pub fn flush_to_stderr(&self) {
    for warning in &self.warnings {
      eprintln!("WARNING: {}", warning);
    }
  }
}
