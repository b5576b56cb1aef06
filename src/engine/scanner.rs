#![forbid(unsafe_code)]

//! Sequential line-oriented scanner
//!
//! The scanner walks the tree, reads every matching file as UTF-8 and runs the
//! configured attribute regex over each physical line. Violations accumulate
//! in a `Vec` owned by the scan call, in file-then-line order.

use crate::engine::file_walker::FileWalker;
use crate::error::ScanError;
use crate::rules::{ScanConfig, Violation};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Characters that end a physical line, besides `\n` and `\r`
const EXTRA_LINE_BREAKS: &[char] = &[
    '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits text into physical lines
///
/// `\r\n` counts as a single break. A trailing break does not start an
/// extra empty line.
pub fn physical_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let is_break = c == '\n' || c == '\r' || EXTRA_LINE_BREAKS.contains(&c);
        if !is_break {
            continue;
        }
        lines.push(&content[start..i]);
        let mut end = i + c.len_utf8();
        if c == '\r'
            && let Some(&(j, '\n')) = chars.peek()
        {
            chars.next();
            end = j + 1;
        }
        start = end;
    }

    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

/// Summary of a completed scan
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Violations in traversal order
    pub violations: Vec<Violation>,
    /// Number of files read
    pub files_scanned: usize,
}

/// Runs one scan configuration over a directory tree
pub struct Scanner<'a> {
    config: &'a ScanConfig,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// Scans every matching file under `root`
    ///
    /// # Errors
    ///
    /// The first unreadable file, or a failure to walk the root itself, aborts
    /// the scan; no partial result is returned. Unreadable subdirectories are
    /// skipped by the walker.
    pub fn scan(&self, root: &Path) -> Result<ScanResult, ScanError> {
        let walker = FileWalker::new(root, std::slice::from_ref(self.config.glob()))?;
        let mut result = ScanResult::default();

        for entry in walker.walk() {
            let entry = entry?;
            let content = fs::read_to_string(&entry.path).map_err(|source| ScanError::Io {
                path: entry.path.clone(),
                source,
            })?;

            let violations = self.scan_content(&entry.path, &content);
            debug!(
                file = %entry.path.display(),
                violations = violations.len(),
                "scanned file"
            );
            result.violations.extend(violations);
            result.files_scanned += 1;
        }

        info!(
            check = %self.config.id(),
            files = result.files_scanned,
            violations = result.violations.len(),
            "scan complete"
        );
        Ok(result)
    }

    /// Scans already-loaded file content
    ///
    /// `path` is only recorded in the violations; nothing is read from disk.
    pub fn scan_content(&self, path: &Path, content: &str) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (index, line) in physical_lines(content).into_iter().enumerate() {
            for class in self.config.rejected_classes(line) {
                violations.push(Violation {
                    check_id: self.config.id().clone(),
                    file: path.to_path_buf(),
                    line: index + 1,
                    class: class.to_string(),
                });
            }
        }

        violations
    }
}
