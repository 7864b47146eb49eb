//! Run summary rendering.

use std::fmt::Write;

use crate::application::services::RunSummary;

const RULE_WIDTH: usize = 60;

/// One line per case followed by the totals
pub fn render_summary(summary: &RunSummary) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    let _ = writeln!(out, "{}", rule);
    for report in &summary.reports {
        let mark = if report.passed() { "PASS" } else { "FAIL" };
        let _ = writeln!(
            out,
            "{} {} {} ({} ms)",
            mark,
            report.id,
            report.title,
            report.elapsed.as_millis()
        );
        if let Err(message) = &report.outcome {
            let _ = writeln!(out, "     {}", message);
        }
    }
    let _ = writeln!(out, "{}", rule);
    let _ = write!(
        out,
        "{} passed, {} failed, {} total",
        summary.passed(),
        summary.failed(),
        summary.reports.len()
    );
    out
}
