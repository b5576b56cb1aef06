//! Test utilities for classcheck integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Creates a temporary tree from `(relative path, content)` pairs
pub fn tree(files: &[(&str, &str)]) -> TestResult<TempDir> {
    let temp_dir = TempDir::new()?;
    for (path, content) in files {
        write_file(temp_dir.path(), path, content.as_bytes())?;
    }
    Ok(temp_dir)
}

/// Writes a file, creating parent directories as needed
pub fn write_file(root: &Path, relative: &str, content: &[u8]) -> TestResult {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}
