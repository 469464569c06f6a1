//! Rename run orchestration: resolve the directory, plan, apply, report

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::{prompt_directory, Cli};
use crate::rename::{apply_plan, plan_directory, RenameOutcome};
use crate::report::RenameSummary;
use crate::utils::{
    format_outcome, print_banner, print_completion, print_info, print_target_directory,
    print_warning, spinner_span,
};

/// Run a full rename pass for the parsed command line
pub fn run_rename(cli: &Cli) -> Result<RenameSummary> {
    let directory = match &cli.directory {
        Some(dir) => dir.clone(),
        None => prompt_directory()?,
    };

    run_rename_in(cli, directory)
}

/// Run a rename pass on an already resolved directory
pub fn run_rename_in(cli: &Cli, directory: PathBuf) -> Result<RenameSummary> {
    let options = cli.rename_options();

    if !cli.quiet {
        print_banner(env!("CARGO_PKG_VERSION"));
        print_target_directory(&directory, options.dry_run);
    }

    let plan = spinner_span("Scanning directory...").in_scope(|| plan_directory(&directory))?;

    if plan.entries.is_empty() && !cli.quiet {
        print_info("No files to rename");
    }

    let summary = apply_plan(&plan, &options, |outcome: &RenameOutcome| {
        if let Some(line) = format_outcome(outcome, options.dry_run) {
            println!("{}", line);
        }
    })?;

    if !cli.quiet {
        if !summary.collisions.is_empty() {
            print_warning(&format!(
                "{} file(s) left untouched because their new name is taken",
                summary.collisions.len()
            ));
        }
        summary.display();
        print_completion(options.dry_run);
    }

    Ok(summary)
}
