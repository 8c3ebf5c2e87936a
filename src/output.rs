//! Console output and styling.
//!
//! All user-facing text goes through [`OutputFormatter`] so the colors and
//! symbols stay consistent. Diagnostics go through `tracing` instead.

use crate::file_organizer::OrganizeReport;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Manages all CLI output with consistent styling and formatting.
///
/// - Success messages (green with ✓)
/// - Error messages (red with ✗), on stderr
/// - Warning messages (yellow with ⚠)
/// - Info messages (cyan)
/// - A scan spinner and the end-of-run summary table
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    ///
    /// ```no_run
    /// use organize::output::OutputFormatter;
    /// OutputFormatter::success("File organization complete.");
    /// ```
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark to stderr.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Prints a dry-run notice.
    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }

    /// Creates a spinner for the directory scan.
    ///
    /// The total number of entries is not known up front, so this ticks
    /// instead of filling a bar. It draws to stderr and stays hidden when
    /// stderr is not a terminal.
    pub fn create_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner:.cyan} {pos} files {msg}")
        {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }

    /// Prints the per-category table of moved files followed by skip and
    /// failure totals.
    pub fn summary_table(report: &OrganizeReport) {
        Self::header(if report.dry_run {
            "SUMMARY (dry run)"
        } else {
            "SUMMARY"
        });

        let category_counts = report.category_counts();
        let mut categories: Vec<_> = category_counts.iter().collect();
        categories.sort_by_key(|&(name, _)| name);

        let width = categories
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            .max("Category".len());

        println!(
            "{:<width$} | {}",
            "Category".bold(),
            "Files".bold(),
            width = width
        );
        println!("{}", "-".repeat(width + 10));

        for (category, count) in &categories {
            println!(
                "{:<width$} | {} {}",
                category,
                count.to_string().green(),
                plural(**count),
                width = width
            );
        }

        println!("{}", "-".repeat(width + 10));
        let moved = report.moved();
        let moved_label = if report.dry_run { "To move" } else { "Moved" };
        println!(
            "{:<width$} | {} {}",
            moved_label.bold(),
            moved.to_string().green().bold(),
            plural(moved),
            width = width
        );

        let skipped = report.skipped();
        if skipped > 0 {
            println!(
                "{:<width$} | {} {}",
                "Skipped",
                skipped.to_string().yellow(),
                plural(skipped),
                width = width
            );
        }

        let failed = report.failures();
        if failed > 0 {
            println!(
                "{:<width$} | {} {}",
                "Failed",
                failed.to_string().red(),
                plural(failed),
                width = width
            );
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(0), "files");
        assert_eq!(plural(1), "file");
        assert_eq!(plural(2), "files");
    }

    #[test]
    fn test_summary_table_on_empty_report() {
        OutputFormatter::summary_table(&OrganizeReport::default());
    }
}
