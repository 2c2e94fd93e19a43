//! Presentation layer: per-check row formatting and HTML document assembly

pub mod html;
pub mod rows;

pub use html::{render_document, RenderContext, SuiteSection};
pub use rows::format_row;
