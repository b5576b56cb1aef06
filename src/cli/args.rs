//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `OK`, or one `path:line class` line per violation
    Human,
    /// JSON Lines format (one JSON object per violation)
    Jsonl,
}

/// Built-in checks selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckKind {
    /// h1-h6 classes must contain `tt-`
    Headings,
    /// button classes must contain `tt-ui`, `btn-primary` or `btn-secondary`
    Buttons,
}

impl CheckKind {
    /// ID of the matching built-in scan configuration
    pub fn id(self) -> &'static str {
        match self {
            CheckKind::Headings => "headings",
            CheckKind::Buttons => "buttons",
        }
    }
}

/// classcheck CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "classcheck")]
#[command(about = "Check className conventions on heading and button tags in TSX files")]
#[command(version)]
pub struct Cli {
    /// Check to run
    #[arg(value_enum, default_value = "headings")]
    pub check: CheckKind,

    /// Directory to scan
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Log each scanned file to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// List the built-in checks instead of scanning
    #[arg(long)]
    pub list: bool,
}
