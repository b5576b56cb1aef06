#![forbid(unsafe_code)]

//! Human-readable report
//!
//! Prints `OK` when nothing was found, otherwise one `path:line class` line
//! per violation in traversal order.

use crate::rules::Violation;

/// Text shown when a scan found nothing
pub const CLEAN_REPORT: &str = "OK";

/// Human-readable output formatter
#[derive(Debug, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Formats violations without a trailing newline
    pub fn format(&self, violations: &[Violation]) -> String {
        if violations.is_empty() {
            return CLEAN_REPORT.to_string();
        }

        violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
