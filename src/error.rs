//! Error types for classcheck
//!
//! Configuration problems are reported through [`ConfigError`]; everything
//! that can go wrong while walking and reading the tree is a [`ScanError`].

use std::path::PathBuf;

/// Errors raised while building a scan configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Glob pattern could not be compiled
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },

    /// Tag pattern could not be compiled into the attribute regex
    #[error("Invalid tag pattern '{pattern}': {source}")]
    InvalidTagPattern {
        pattern: String,
        source: regex::Error,
    },

    /// Predicate has nothing to accept
    #[error("Acceptance predicate for '{0}' has no accepted substrings")]
    EmptyPredicate(String),

    /// No built-in check with this id
    #[error("Unknown check: {0}")]
    UnknownCheck(String),
}

/// Errors that abort a scan
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File could not be read (missing permissions, invalid UTF-8, ...)
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}
