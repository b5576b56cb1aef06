//! File discovery and the scanning pass

pub mod file_walker;
pub mod scanner;

pub use scanner::{ScanResult, Scanner};
