//! Terminal output utilities.
//!
//! Provides formatting helpers for the end-of-run console summary.

use crate::RunSummary;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Print the per-subscription outcome table and row count to stdout.
pub fn print_run_summary(summary: &RunSummary) {
    println!(
        "{sub},{status}",
        sub = format_field("subscription", 39),
        status = format_field("status", 8)
    );
    for sub in &summary.subscriptions_ok {
        println!(
            "{sub},{status}",
            sub = format_field(sub, 39),
            status = format_field("ok", 8)
        );
    }
    for sub in &summary.subscriptions_failed {
        println!(
            "{sub},{status}",
            sub = format_field(sub, 39),
            status = format_field("FAILED".red(), 8)
        );
    }
    println!(
        "# {} rows written to {}",
        summary.rows_written,
        summary.output_path.display()
    );
}
