//! Integration test suite for the checkspec binary

mod helpers;
mod test_includes;
mod test_write;
