//! Display utilities for run results.

use std::path::Path;

use bytesize::ByteSize;
use console::style;

use crate::types::Summary;

/// Formats the confirmation line for a finished run.
pub fn success_message(path: &Path, summary: &Summary) -> String {
    format!(
        "Text file encoded to {} in {:?} ({} lines, {})",
        path.display(),
        summary.elapsed,
        summary.lines,
        ByteSize::b(summary.bytes)
    )
}

/// Prints the confirmation line to stdout.
pub fn show_success(path: &Path, summary: &Summary) {
    println!("{} {}", style("✓").green(), style(success_message(path, summary)).bold());
}
