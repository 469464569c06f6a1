//! CLI module - argument parsing, interactive prompts and the rename run

mod args;
mod prompts;
mod run;

pub use args::Cli;
pub use prompts::*;
pub use run::*;
