//! Kebabify: CamelCase to kebab-case file renaming library
//!
//! Converts the base names of the files in a single directory to kebab-case,
//! keeping extensions as they are.

pub mod cli;
pub mod rename;
pub mod report;
pub mod utils;
