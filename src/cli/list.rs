//! List command implementation
//!
//! Shows every built-in check with its description, file glob, tag pattern
//! and accepted class substrings.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use crate::error::ConfigError;
use crate::rules::builtin::builtin_ids;
use crate::rules::{ClassPredicate, ScanConfig, load_builtin};
use crate::types::CheckId;
use serde::Serialize;

/// Error type specific to the list command
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to serialize check list: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// JSONL record describing one check
#[derive(Debug, Serialize)]
struct CheckRecord<'a> {
    id: &'a CheckId,
    description: &'a str,
    glob: &'a str,
    tag: &'a str,
    accepted: &'a [String],
}

/// Run the list command and return the process exit code
pub fn run_list(format: OutputFormat) -> i32 {
    match render_list(format) {
        Ok(listing) => {
            print!("{}", listing);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Renders the built-in checks, one per line
pub fn render_list(format: OutputFormat) -> Result<String, ListError> {
    let configs = builtin_ids()
        .map(load_builtin)
        .collect::<Result<Vec<ScanConfig>, _>>()?;

    let mut output = String::new();
    for config in &configs {
        let ClassPredicate::ContainsAny(accepted) = config.predicate();
        match format {
            OutputFormat::Human => {
                output.push_str(&format!(
                    "{}: {} (<{}> in {}, accepts {})\n",
                    config.id(),
                    config.description(),
                    config.tag(),
                    config.glob(),
                    accepted.join(", ")
                ));
            }
            OutputFormat::Jsonl => {
                let record = CheckRecord {
                    id: config.id(),
                    description: config.description(),
                    glob: config.glob().as_str(),
                    tag: config.tag().as_str(),
                    accepted,
                };
                output.push_str(&serde_json::to_string(&record)?);
                output.push('\n');
            }
        }
    }
    Ok(output)
}
