use std::fmt::Write;
use std::time::Duration;

use crate::results::ScanReport;

/// Renders a scan report as human-readable text.
///
/// Pure formatting: statistics first, then the per-file listing with a
/// 1-based index and the matching lines indented beneath each file (or a
/// "no matches" message), then the elapsed time. With `stats_only` the
/// per-file listing is replaced by the aggregate counts.
pub fn render(report: &ScanReport, stats_only: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Files scanned: {}", report.files_scanned);
    let _ = writeln!(out, "Workers used: {}", report.thread_count);
    if report.files_skipped > 0 {
        let _ = writeln!(out, "Files skipped (unreadable): {}", report.files_skipped);
    }
    let _ = writeln!(out);

    if report.file_results.is_empty() {
        let _ = writeln!(
            out,
            "No matches found for \"{}\" in any files.",
            report.query
        );
    } else if stats_only {
        let _ = writeln!(
            out,
            "Found {} matching lines in {} files for \"{}\".",
            report.total_matches, report.files_matched, report.query
        );
    } else {
        let _ = writeln!(
            out,
            "Found matches for \"{}\" in the following files:",
            report.query
        );
        let _ = writeln!(out);

        for (index, file_result) in report.file_results.iter().enumerate() {
            let _ = writeln!(out, "{}. File: {}", index + 1, file_result.path.display());
            for line in &file_result.lines {
                let _ = writeln!(out, "   {}: {}", line.line_number, line.content);
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(
            out,
            "Found {} matching lines in {} files.",
            report.total_matches, report.files_matched
        );
    }

    let _ = writeln!(out, "Scan completed in {}", format_elapsed(report.elapsed));
    out
}

// Truncated to milliseconds; nanosecond noise has no place in a summary line
fn format_elapsed(elapsed: Duration) -> String {
    humantime::format_duration(Duration::from_millis(elapsed.as_millis() as u64)).to_string()
}
