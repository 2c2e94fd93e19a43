//! Error types for checkspec with contextual messages and exit codes
//!
//! This module provides a unified error type that categorizes failures along
//! the pipeline's taxonomy (parse, validation, introspection, I/O) and maps
//! each category to a stable process exit code. Fatal errors unwind to the
//! top-level driver; non-fatal conditions go through `core::diagnostics`
//! instead and never appear here.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for checkspec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (malformed input document, invalid args, missing files)
  User = 1,
  /// System error (I/O)
  System = 2,
  /// Validation failure (schema violation, broken check definition)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for checkspec
#[derive(Debug)]
pub enum SpecError {
  /// A document could not be parsed as YAML
  Parse(ParseError),

  /// A document is well-formed but violates the schema
  Validation(ValidationError),

  /// A declared check could not be resolved, instantiated or described
  Introspection(IntrospectionError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl SpecError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    SpecError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    SpecError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      SpecError::Message { message, context, help } => SpecError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      SpecError::Parse(_) => ExitCode::User,
      SpecError::Validation(_) => ExitCode::Validation,
      SpecError::Introspection(_) => ExitCode::Validation,
      SpecError::Io(_) => ExitCode::System,
      SpecError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      SpecError::Parse(e) => e.help_message(),
      SpecError::Validation(e) => e.help_message(),
      SpecError::Introspection(e) => e.help_message(),
      SpecError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for SpecError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SpecError::Parse(e) => write!(f, "{}", e),
      SpecError::Validation(e) => write!(f, "{}", e),
      SpecError::Introspection(e) => write!(f, "{}", e),
      SpecError::Io(e) => write!(f, "I/O error: {}", e),
      SpecError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for SpecError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      SpecError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for SpecError {
  fn from(err: io::Error) -> Self {
    SpecError::Io(err)
  }
}

impl From<String> for SpecError {
  fn from(msg: String) -> Self {
    SpecError::message(msg)
  }
}

impl From<&str> for SpecError {
  fn from(msg: &str) -> Self {
    SpecError::message(msg)
  }
}

impl From<ParseError> for SpecError {
  fn from(err: ParseError) -> Self {
    SpecError::Parse(err)
  }
}

impl From<ValidationError> for SpecError {
  fn from(err: ValidationError) -> Self {
    SpecError::Validation(err)
  }
}

impl From<IntrospectionError> for SpecError {
  fn from(err: IntrospectionError) -> Self {
    SpecError::Introspection(err)
  }
}

/// A document that could not be parsed as YAML
#[derive(Debug)]
pub struct ParseError {
  /// The file the document was read from
  pub file: PathBuf,
  /// The underlying parser diagnostic
  pub cause: String,
}

impl ParseError {
  fn help_message(&self) -> Option<String> {
    Some("Check the YAML syntax of the file, e.g. with a YAML linter.".to_string())
  }
}

impl fmt::Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Failed to parse '{}' as YAML: {}", self.file.display(), self.cause)
  }
}

/// Schema violations in metadata or check-suite documents
#[derive(Debug)]
pub enum ValidationError {
  /// A required key is absent
  MissingKey { key: String, file: Option<PathBuf> },

  /// A field has the wrong shape (e.g. `checks` is not a sequence)
  BadShape { field: String, expected: String },

  /// An include directive re-enters a file already being resolved
  IncludeCycle { file: PathBuf },

  /// Two input files declare the same suite name
  DuplicateSuite { suite_name: String },
}

impl ValidationError {
  fn help_message(&self) -> Option<String> {
    match self {
      ValidationError::MissingKey { key, .. } => {
        Some(format!("Add the '{}' key to the document.", key))
      }
      ValidationError::IncludeCycle { .. } => {
        Some("Remove the circular include directive from the suite files.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ValidationError::MissingKey { key, file } => match file {
        Some(file) => write!(f, "Required key '{}' not found in '{}'", key, file.display()),
        None => write!(f, "Required key '{}' not found", key),
      },
      ValidationError::BadShape { field, expected } => {
        write!(f, "Field '{}' is malformed: expected {}", field, expected)
      }
      ValidationError::IncludeCycle { file } => {
        write!(f, "Include cycle detected at '{}'", file.display())
      }
      ValidationError::DuplicateSuite { suite_name } => {
        write!(f, "Suite '{}' is declared by more than one input file", suite_name)
      }
    }
  }
}

/// Failures resolving, instantiating or describing a declared check
#[derive(Debug)]
pub enum IntrospectionError {
  /// The dotted check name is not present in the registry
  UnknownCheck { check_name: String },

  /// The declared parameters do not satisfy the check's constructor
  BadParameters { check_name: String, detail: String },

  /// The instantiated check failed to produce a description
  Description { check_name: String, detail: String },
}

impl IntrospectionError {
  fn help_message(&self) -> Option<String> {
    match self {
      IntrospectionError::UnknownCheck { .. } => {
        Some("Check the spelling of the dotted check name against the registered checks.".to_string())
      }
      IntrospectionError::BadParameters { .. } => {
        Some("Compare the 'parameters' mapping against the check's documented parameters.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for IntrospectionError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      IntrospectionError::UnknownCheck { check_name } => {
        write!(f, "Unknown check '{}'", check_name)
      }
      IntrospectionError::BadParameters { check_name, detail } => {
        write!(f, "Invalid parameters for check '{}': {}", check_name, detail)
      }
      IntrospectionError::Description { check_name, detail } => {
        write!(f, "Error getting description for check '{}': {}", check_name, detail)
      }
    }
  }
}

/// Result type alias for checkspec
pub type SpecResult<T> = Result<T, SpecError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> SpecResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> SpecResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<SpecError>,
{
  fn context(self, ctx: impl Into<String>) -> SpecResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> SpecResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &SpecError) {
  eprintln!("\nError: {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("Help: {}\n", help);
  }
}
