//! File discovery and traversal
//!
//! Walks a directory tree the way a plain recursive glob does: hidden entries
//! are visited, ignore files are not consulted and directory symlinks are not
//! descended into. A symlink whose target is a regular file counts as a file.
//! Entries are sorted by file name within each directory so repeated walks
//! over an unchanged tree yield the same order.
//!
//! Directories below the root that cannot be read are skipped with a warning;
//! only a failure on the root itself is reported as an error.

use crate::error::ConfigError;
use crate::types::GlobPattern;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Reason why a file was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// File name did not match the include patterns
    ExcludedByPattern,
    /// Entry is not a regular file (e.g., directory, symlink to a directory)
    NotAFile,
    /// Directory below the root could not be read
    Unreadable,
}

/// Result of file walking - either a file to scan or a skipped entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkResult {
    /// File to be scanned
    File(FileEntry),
    /// Entry that was skipped with reason
    Skipped { path: PathBuf, reason: SkipReason },
}

/// A discovered file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path as reported by the walk, with a leading `./` removed
    pub path: PathBuf,
}

impl FileEntry {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

/// Strips the `./` that walking from `.` puts in front of every path
fn display_path(path: &Path) -> PathBuf {
    match path.strip_prefix(".") {
        Ok(stripped) if !stripped.as_os_str().is_empty() => stripped.to_path_buf(),
        _ => path.to_path_buf(),
    }
}

/// Iterator over discovered files
pub struct FileWalker {
    walker: ignore::Walk,
    include_set: GlobSet,
}

impl FileWalker {
    /// Creates a new FileWalker
    ///
    /// # Arguments
    /// * `root` - Root directory to walk
    /// * `include` - File name patterns; a file is kept if any of them matches
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidGlob` if a pattern does not compile.
    pub fn new(root: &Path, include: &[GlobPattern]) -> Result<Self, ConfigError> {
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let include_set = Self::build_globset(include)?;

        Ok(Self {
            walker,
            include_set,
        })
    }

    /// Builds a GlobSet from patterns
    ///
    /// `*` does not cross path separators; patterns are matched against the
    /// file name component.
    fn build_globset(patterns: &[GlobPattern]) -> Result<GlobSet, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = GlobBuilder::new(pattern.as_str())
                .literal_separator(true)
                .build()
                .map_err(|source| ConfigError::InvalidGlob {
                    pattern: pattern.as_str().to_string(),
                    source,
                })?;
            builder.add(glob);
        }
        builder.build().map_err(|source| ConfigError::InvalidGlob {
            pattern: "<globset>".to_string(),
            source,
        })
    }

    /// Walks the directory tree and returns an iterator over matching files
    pub fn walk(self) -> impl Iterator<Item = Result<FileEntry, ignore::Error>> {
        self.walk_with_skip_info()
            .filter_map(|result| match result {
                Ok(WalkResult::File(file)) => Some(Ok(file)),
                Ok(WalkResult::Skipped { .. }) => None,
                Err(e) => Some(Err(e)),
            })
    }

    /// Walks the directory tree and returns an iterator with skip information
    pub fn walk_with_skip_info(self) -> impl Iterator<Item = Result<WalkResult, ignore::Error>> {
        let include_set = self.include_set;

        self.walker.map(move |result| {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => return skip_unreadable(e),
            };
            let path = entry.path();

            let matched = path
                .file_name()
                .is_some_and(|name| include_set.is_match(name));

            if !entry.file_type().is_some_and(|ft| is_file_like(path, ft)) {
                // A dangling symlink still goes to the scanner so the read fails.
                let dangling = entry.path_is_symlink() && fs::metadata(path).is_err();
                if !(matched && dangling) {
                    return Ok(WalkResult::Skipped {
                        path: path.to_path_buf(),
                        reason: SkipReason::NotAFile,
                    });
                }
            }

            if !matched {
                return Ok(WalkResult::Skipped {
                    path: path.to_path_buf(),
                    reason: SkipReason::ExcludedByPattern,
                });
            }

            Ok(WalkResult::File(FileEntry::new(display_path(path))))
        })
    }
}

/// Regular files, and symlinks whose target is a regular file
fn is_file_like(path: &Path, file_type: fs::FileType) -> bool {
    if file_type.is_symlink() {
        return fs::metadata(path).is_ok_and(|meta| meta.is_file());
    }
    file_type.is_file()
}

/// Depth recorded on a walk error, if any
fn error_depth(err: &ignore::Error) -> Option<usize> {
    match err {
        ignore::Error::WithDepth { depth, .. } => Some(*depth),
        ignore::Error::WithPath { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_depth(err)
        }
        _ => None,
    }
}

/// Path recorded on a walk error, if any
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}

/// Turns an I/O failure below the root into a skip; anything else stays an error
fn skip_unreadable(err: ignore::Error) -> Result<WalkResult, ignore::Error> {
    let below_root = error_depth(&err).is_some_and(|depth| depth > 0);
    if !below_root || err.io_error().is_none() {
        return Err(err);
    }

    let path = error_path(&err).map(Path::to_path_buf).unwrap_or_default();
    warn!(path = %path.display(), error = %err, "skipping unreadable directory");
    Ok(WalkResult::Skipped {
        path,
        reason: SkipReason::Unreadable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn tsx() -> Vec<GlobPattern> {
        vec![GlobPattern::new("*.tsx")]
    }

    #[test]
    fn test_display_path_strips_current_dir() {
        assert_eq!(display_path(Path::new("./Page.tsx")), PathBuf::from("Page.tsx"));
        assert_eq!(
            display_path(Path::new("./app/Page.tsx")),
            PathBuf::from("app/Page.tsx")
        );
        assert_eq!(display_path(Path::new("web/Page.tsx")), PathBuf::from("web/Page.tsx"));
        assert_eq!(display_path(Path::new(".")), PathBuf::from("."));
    }

    #[test]
    fn test_build_globset_valid() {
        let patterns = vec![GlobPattern::new("*.tsx"), GlobPattern::new("*.jsx")];
        assert!(FileWalker::build_globset(&patterns).is_ok());
    }

    #[test]
    fn test_build_globset_invalid() {
        let patterns = vec![GlobPattern::new("[invalid")];
        let result = FileWalker::build_globset(&patterns);
        assert!(matches!(result, Err(ConfigError::InvalidGlob { .. })));
    }

    #[test]
    fn test_walk_filters_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Page.tsx"), "").unwrap();
        fs::write(temp_dir.path().join("page.ts"), "").unwrap();
        fs::write(temp_dir.path().join("Page.tsx.bak"), "").unwrap();
        fs::write(temp_dir.path().join("README.md"), "").unwrap();

        let walker = FileWalker::new(temp_dir.path(), &tsx()).unwrap();
        let files: Vec<_> = walker.walk().map(|r| r.unwrap()).collect();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, temp_dir.path().join("Page.tsx"));
    }

    #[test]
    fn test_walk_recurses_and_includes_hidden() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("app").join("components");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir_all(temp_dir.path().join(".storybook")).unwrap();
        fs::write(nested.join("Nav.tsx"), "").unwrap();
        fs::write(temp_dir.path().join(".storybook").join("Preview.tsx"), "").unwrap();
        fs::write(temp_dir.path().join(".gitignore"), "app/\n").unwrap();

        let walker = FileWalker::new(temp_dir.path(), &tsx()).unwrap();
        let files: Vec<_> = walker.walk().map(|r| r.unwrap().path).collect();

        assert_eq!(
            files,
            vec![
                temp_dir.path().join(".storybook").join("Preview.tsx"),
                nested.join("Nav.tsx"),
            ]
        );
    }

    #[test]
    fn test_walk_skips_directories_named_like_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("weird.tsx")).unwrap();

        let walker = FileWalker::new(temp_dir.path(), &tsx()).unwrap();
        let results: Vec<_> = walker.walk_with_skip_info().map(|r| r.unwrap()).collect();

        assert!(results.iter().all(|r| matches!(
            r,
            WalkResult::Skipped {
                reason: SkipReason::NotAFile,
                ..
            }
        )));
    }

    #[test]
    fn test_walk_order_is_stable() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.tsx", "a.tsx", "c.tsx"] {
            fs::write(temp_dir.path().join(name), "").unwrap();
        }

        let collect = || -> Vec<PathBuf> {
            FileWalker::new(temp_dir.path(), &tsx())
                .unwrap()
                .walk()
                .map(|r| r.unwrap().path)
                .collect()
        };

        let first = collect();
        assert_eq!(first, collect());
        assert_eq!(
            first,
            vec![
                temp_dir.path().join("a.tsx"),
                temp_dir.path().join("b.tsx"),
                temp_dir.path().join("c.tsx"),
            ]
        );
    }

    fn io_error_at(depth: usize, path: &str) -> ignore::Error {
        ignore::Error::WithPath {
            path: PathBuf::from(path),
            err: Box::new(ignore::Error::WithDepth {
                depth,
                err: Box::new(ignore::Error::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "denied",
                ))),
            }),
        }
    }

    #[test]
    fn test_unreadable_subdirectory_is_skipped() {
        let result = skip_unreadable(io_error_at(1, "./locked"));
        assert_eq!(
            result.unwrap(),
            WalkResult::Skipped {
                path: PathBuf::from("./locked"),
                reason: SkipReason::Unreadable,
            }
        );
    }

    #[test]
    fn test_unreadable_root_is_an_error() {
        assert!(skip_unreadable(io_error_at(0, ".")).is_err());
    }

    #[test]
    fn test_non_io_walk_error_is_an_error() {
        let err = ignore::Error::WithDepth {
            depth: 3,
            err: Box::new(ignore::Error::Loop {
                ancestor: PathBuf::from("a"),
                child: PathBuf::from("a/b/c"),
            }),
        };
        assert!(skip_unreadable(err).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_keeps_file_symlinks_and_skips_dir_symlinks() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let shared = temp_dir.path().join("shared");
        fs::create_dir_all(shared.join("inner")).unwrap();
        fs::write(shared.join("real.txt"), "").unwrap();
        fs::write(shared.join("inner").join("Deep.tsx"), "").unwrap();
        symlink(shared.join("real.txt"), temp_dir.path().join("Page.tsx")).unwrap();
        symlink(shared.join("inner"), temp_dir.path().join("linked")).unwrap();

        let walker = FileWalker::new(temp_dir.path(), &tsx()).unwrap();
        let files: Vec<_> = walker.walk().map(|r| r.unwrap().path).collect();

        assert_eq!(
            files,
            vec![
                temp_dir.path().join("Page.tsx"),
                shared.join("inner").join("Deep.tsx"),
            ]
        );
    }
}
