//! CLI command implementations
//!
//! - **write**: the full pipeline from YAML inputs to the HTML document

pub mod write;

pub use write::{run_write, WriteOptions};
