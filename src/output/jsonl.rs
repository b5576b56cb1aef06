#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! One JSON object per violation, in traversal order. A clean scan produces
//! no output at all.

use crate::rules::Violation;
use crate::types::CheckId;
use serde::Serialize;

/// JSONL output formatter
#[derive(Debug, Default)]
pub struct JsonlFormatter;

/// A single violation record
#[derive(Debug, Serialize)]
struct ViolationRecord<'a> {
    check: &'a CheckId,
    file: String,
    line: usize,
    class: &'a str,
}

impl JsonlFormatter {
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Formats violations as JSON lines, each terminated by a newline
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if a record fails to serialize.
    pub fn format(&self, violations: &[Violation]) -> Result<String, serde_json::Error> {
        let mut output = String::new();
        for violation in violations {
            let record = ViolationRecord {
                check: &violation.check_id,
                file: violation.file.display().to_string(),
                line: violation.line,
                class: &violation.class,
            };
            output.push_str(&serde_json::to_string(&record)?);
            output.push('\n');
        }
        Ok(output)
    }
}
