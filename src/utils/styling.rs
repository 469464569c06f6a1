//! Terminal styling utilities

use console::{style, Emoji};
use std::path::Path;

use crate::rename::RenameOutcome;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SPARKLES: Emoji<'_, '_> = Emoji("✨ ", ">> ");

/// Print the application banner to stderr
pub fn print_banner(version: &str) {
    eprintln!();
    eprintln!(
        "    {} {}",
        style("kebabify").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    eprintln!(
        "    {}",
        style("CamelCase file names, served as kebab-case").dim()
    );
    eprintln!("    {}", style("━".repeat(50)).dim());
}

/// Print the directory being processed
pub fn print_target_directory(dir: &Path, dry_run: bool) {
    let mode = if dry_run {
        style("(dry run)").yellow().to_string()
    } else {
        String::new()
    };
    eprintln!(
        "    {}{} {}",
        FOLDER,
        style(dir.display()).white().bold(),
        mode
    );
    eprintln!();
}

/// Format the stdout line for one outcome.
///
/// Unchanged names produce no line.
pub fn format_outcome(outcome: &RenameOutcome, dry_run: bool) -> Option<String> {
    match outcome {
        RenameOutcome::Renamed { from, to } => {
            let verb = if dry_run { "Would rename:" } else { "Renamed:" };
            Some(format!("{} {} -> {}", verb, from, style(to).green()))
        }
        RenameOutcome::Collision { from, to } => Some(format!(
            "{} {} -> {} {}",
            style("Skipped:").yellow(),
            from,
            to,
            style("(target exists)").dim()
        )),
        RenameOutcome::Unchanged { .. } => None,
    }
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("    {} {}", WARN, style(message).yellow());
}

/// Print the final completion message
pub fn print_completion(dry_run: bool) {
    let message = if dry_run {
        "Dry run complete, nothing was renamed."
    } else {
        "Kebabify complete!"
    };
    eprintln!();
    eprintln!("    {} {}", SPARKLES, style(message).green().bold());
    eprintln!();
}
