//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::rename::{CollisionPolicy, RenameOptions};

/// Kebabify - Rename CamelCase files in a directory to kebab-case
#[derive(Parser, Debug)]
#[command(name = "kebabify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory whose files should be renamed (not recursive).
    /// If not provided, you will be prompted for it.
    pub directory: Option<PathBuf>,

    /// Show what would be renamed without touching any file
    #[arg(short = 'n', long, default_value = "false")]
    pub dry_run: bool,

    /// What to do when the kebab-case name is already taken.
    /// "skip" leaves the file alone, "error" aborts the run,
    /// "overwrite" renames anyway and lets the filesystem decide.
    #[arg(long, value_enum, default_value_t = CollisionPolicy::Skip)]
    pub on_collision: CollisionPolicy,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    /// RUST_LOG overrides this when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner and the summary table
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    /// Options for the rename pass
    pub fn rename_options(&self) -> RenameOptions {
        RenameOptions {
            dry_run: self.dry_run,
            on_collision: self.on_collision,
        }
    }
}
