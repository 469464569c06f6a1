//! Kebabify: CamelCase to kebab-case file renaming CLI
//!
//! Renames every file in one directory so its base name is kebab-case.
//! Subdirectories are left alone.

use anyhow::Result;
use clap::Parser;

use kebabify::cli::{run_rename, Cli};
use kebabify::utils::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    run_rename(&cli)?;

    Ok(())
}
