//! Rename module - case conversion and the directory walk

pub mod case;
pub mod error;
pub mod filename;
pub mod walker;

pub use case::*;
pub use error::*;
pub use filename::*;
pub use walker::*;
