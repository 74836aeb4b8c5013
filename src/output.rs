//! Console output formatting.
//!
//! Format functions are pure and return strings for testability; `print_*`
//! wrappers write to stdout. The statistics report goes to stdout because
//! it is the program's primary result; per-file progress and diagnostics
//! go through `tracing` instead.

use crate::classify::Stats;
use crate::pipeline::BatchReport;

/// One `label: count` line per bucket, in fixed display order.
pub fn format_stats_report(stats: &Stats) -> Vec<String> {
    stats
        .rows()
        .iter()
        .map(|(label, count)| format!("{label}: {count}"))
        .collect()
}

/// The same counts as machine-readable JSON, one key per bucket.
pub fn format_stats_json(stats: &Stats) -> serde_json::Result<String> {
    serde_json::to_string_pretty(stats)
}

/// One-line summary of a thumbnail pass. The created count is always
/// shown; skipped and failed counts only when non-zero.
pub fn format_batch_summary(report: &BatchReport) -> String {
    let mut extras = Vec::new();
    if report.skipped_existing > 0 {
        extras.push(format!("{} already existed", report.skipped_existing));
    }
    if report.failed > 0 {
        extras.push(format!("{} failed", report.failed));
    }

    if extras.is_empty() {
        format!("Thumbnails created: {}", report.created)
    } else {
        format!(
            "Thumbnails created: {} ({})",
            report.created,
            extras.join(", ")
        )
    }
}

/// Print the bucket report to stdout.
pub fn print_stats_report(stats: &Stats) {
    for line in format_stats_report(stats) {
        println!("{line}");
    }
}
