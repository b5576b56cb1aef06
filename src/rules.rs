#![forbid(unsafe_code)]

//! Scan configurations and built-in checks

pub mod builtin;
mod rule;

// Re-export core types
pub use builtin::{button_check, heading_check, load_builtin};
pub use rule::{ClassPredicate, ScanConfig, Violation};
