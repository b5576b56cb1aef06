//! Check command implementation
//!
//! Loads the selected built-in configuration, scans the root directory and
//! prints the report. Finding violations is not a failure: the command exits
//! successfully either way and only errors change the exit code.

use crate::cli::args::{CheckKind, OutputFormat};
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use crate::engine::Scanner;
use crate::error::ScanError;
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::rules::load_builtin;
use std::path::Path;

/// Error type specific to the check command
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Run the check command and return the process exit code
///
/// # Returns
///
/// - 0: scan completed (with or without violations)
/// - 2: configuration, traversal or I/O error
pub fn run_check(check: CheckKind, root: &Path, format: OutputFormat) -> i32 {
    match render_report(check, root, format) {
        Ok(report) => {
            print!("{}", report);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Scans `root` with the selected check and returns the full report text
///
/// The human report always ends with a newline; the JSONL report is empty
/// when nothing was found.
pub fn render_report(
    check: CheckKind,
    root: &Path,
    format: OutputFormat,
) -> Result<String, CheckError> {
    let config = load_builtin(check.id()).map_err(ScanError::from)?;
    let result = Scanner::new(&config).scan(root)?;

    let report = match format {
        OutputFormat::Human => format!("{}\n", HumanFormatter::new().format(&result.violations)),
        OutputFormat::Jsonl => JsonlFormatter::new().format(&result.violations)?,
    };
    Ok(report)
}
