#![forbid(unsafe_code)]

//! classcheck: className convention checks for TSX markup
//!
//! Scans a directory tree for `*.tsx` files and reports heading or button
//! tags whose `className` does not use an approved class.

pub mod cli;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, ScanError};

// Re-export core domain types for convenient access
pub use rules::{ClassPredicate, ScanConfig, Violation};
pub use types::{CheckId, GlobPattern, TagPattern};
