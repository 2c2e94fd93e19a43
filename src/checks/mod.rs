//! Check implementations and introspection
//!
//! Every check record declares a dotted implementation name. Instead of
//! resolving such names dynamically, an explicit `CheckRegistry` maps each
//! dotted name to a factory; unknown names fail fast before any output is
//! produced. An instantiated check can describe itself and enumerate its
//! possible response messages, which is all the specification document
//! needs from it.
//!
//! # Built-in checks
//!
//! - **FileSizeCheck**: data file stays under a size threshold
//! - **FileNameStructureCheck**: file names follow a delimited structure
//! - **GlobalAttrRegexCheck**: a global attribute matches a regex
//! - **GlobalAttrVocabCheck**: a global attribute is in a vocabulary
//! - **VariableRangeCheck**: a variable's values stay within a range

mod builtin;
mod enrich;
mod registry;

pub use enrich::{enrich, EnrichedCheck};
pub use registry::{CheckImpl, CheckRegistry};
