//! Core infrastructure for the checkspec pipeline
//!
//! - **diagnostics**: explicit collection of non-fatal warnings
//! - **error**: comprehensive error types with contextual help messages
//! - **metadata**: project metadata loading and schema validation

pub mod diagnostics;
pub mod error;
pub mod metadata;
