//! Rename summary report generation

use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::rename::{RenameOutcome, RenamePlan};

/// Summary of one rename run
#[derive(Debug, Default)]
pub struct RenameSummary {
    pub renamed: usize,
    pub unchanged: usize,
    pub collisions: Vec<(String, String)>,
    pub skipped_dirs: usize,
    pub skipped_non_utf8: usize,
    pub dry_run: bool,
    pub elapsed: Duration,
}

impl RenameSummary {
    pub fn new(plan: &RenamePlan, dry_run: bool) -> Self {
        Self {
            skipped_dirs: plan.skipped_dirs,
            skipped_non_utf8: plan.skipped_non_utf8,
            dry_run,
            ..Default::default()
        }
    }

    pub fn record(&mut self, outcome: &RenameOutcome) {
        match outcome {
            RenameOutcome::Renamed { .. } => self.renamed += 1,
            RenameOutcome::Unchanged { .. } => self.unchanged += 1,
            RenameOutcome::Collision { from, to } => {
                self.collisions.push((from.clone(), to.clone()));
            }
        }
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }

    /// Total number of file entries considered
    pub fn files_seen(&self) -> usize {
        self.renamed + self.unchanged + self.collisions.len()
    }

    /// Build the summary table
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📁 Files Scanned"), Cell::new(self.files_seen())]);

        let renamed_label = if self.dry_run {
            "✏️  Would Rename"
        } else {
            "✏️  Files Renamed"
        };
        table.add_row(vec![
            Cell::new(renamed_label),
            Cell::new(self.renamed)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("✅ Already Kebab-Case"),
            Cell::new(self.unchanged),
        ]);

        table.add_row(vec![
            Cell::new("⚠️  Collisions"),
            Cell::new(self.collisions.len()).fg(if self.collisions.is_empty() {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![
            Cell::new("📂 Directories Skipped"),
            Cell::new(self.skipped_dirs),
        ]);

        if self.skipped_non_utf8 > 0 {
            table.add_row(vec![
                Cell::new("❓ Unreadable Names"),
                Cell::new(self.skipped_non_utf8).fg(Color::Yellow),
            ]);
        }

        table.add_row(vec![
            Cell::new("⏱️  Elapsed"),
            Cell::new(format!("{:.2?}", self.elapsed)),
        ]);

        table
    }

    /// Print the summary to stderr, keeping stdout for rename records
    pub fn display(&self) {
        eprintln!();
        eprintln!(
            "    {} {}",
            style("📋").cyan(),
            style("RENAME SUMMARY").white().bold()
        );
        eprintln!("    {}", style("─".repeat(50)).dim());
        eprintln!();

        // Indent the table
        for line in self.table().to_string().lines() {
            eprintln!("    {}", line);
        }

        if !self.collisions.is_empty() {
            eprintln!();
            eprintln!(
                "    {} {}",
                style("📝").cyan(),
                style("LEFT UNTOUCHED").white().bold()
            );
            eprintln!("    {}", style("─".repeat(50)).dim());
            eprintln!();
            for (from, to) in &self.collisions {
                eprintln!(
                    "        {} {} {} {}",
                    style("•").dim(),
                    from,
                    style("->").dim(),
                    style(to).yellow()
                );
            }
        }
    }
}
