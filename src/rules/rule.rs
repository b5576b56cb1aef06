#![forbid(unsafe_code)]

//! Scan configurations, acceptance predicates and violations

use crate::error::ConfigError;
use crate::types::{CheckId, GlobPattern, TagPattern};
use regex::Regex;
use std::fmt;
use std::path::PathBuf;

/// Decides whether a captured `className` value follows the naming convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassPredicate {
    /// Accepts when any of the substrings occurs anywhere in the class string
    ContainsAny(Vec<String>),
}

impl ClassPredicate {
    /// Convenience constructor for [`ClassPredicate::ContainsAny`]
    pub fn contains_any<I, S>(needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ClassPredicate::ContainsAny(needles.into_iter().map(Into::into).collect())
    }

    pub fn accepts(&self, class: &str) -> bool {
        match self {
            ClassPredicate::ContainsAny(needles) => {
                needles.iter().any(|needle| class.contains(needle.as_str()))
            }
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            ClassPredicate::ContainsAny(needles) => needles.is_empty(),
        }
    }
}

/// A compiled scan configuration: which files, which tags, which classes pass
///
/// Immutable once built. The glob is compiled by the file walker, which
/// matches it against file names only.
pub struct ScanConfig {
    id: CheckId,
    description: String,
    glob: GlobPattern,
    tag: TagPattern,
    pattern: Regex,
    predicate: ClassPredicate,
}

impl fmt::Debug for ScanConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanConfig")
            .field("id", &self.id)
            .field("description", &self.description)
            .field("glob", &self.glob)
            .field("tag", &self.tag)
            .field("pattern", &self.pattern.as_str())
            .field("predicate", &self.predicate)
            .finish()
    }
}

impl ScanConfig {
    /// Compiles a scan configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTagPattern` when the tag pattern fails to
    /// compile and `ConfigError::EmptyPredicate` when the predicate could
    /// never accept anything.
    pub fn new(
        id: CheckId,
        description: impl Into<String>,
        glob: GlobPattern,
        tag: TagPattern,
        predicate: ClassPredicate,
    ) -> Result<Self, ConfigError> {
        if predicate.is_empty() {
            return Err(ConfigError::EmptyPredicate(id.to_string()));
        }

        let pattern =
            Regex::new(&tag.attribute_regex()).map_err(|source| ConfigError::InvalidTagPattern {
                pattern: tag.as_str().to_string(),
                source,
            })?;

        Ok(ScanConfig {
            id,
            description: description.into(),
            glob,
            tag,
            pattern,
            predicate,
        })
    }

    pub fn id(&self) -> &CheckId {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn glob(&self) -> &GlobPattern {
        &self.glob
    }

    pub fn tag(&self) -> &TagPattern {
        &self.tag
    }

    pub fn predicate(&self) -> &ClassPredicate {
        &self.predicate
    }

    /// Returns every rejected `className` value on a single line, in match order
    ///
    /// The predicate sees the raw capture; the returned strings are trimmed.
    pub fn rejected_classes<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pattern
            .captures_iter(line)
            .filter_map(|caps| caps.name("class"))
            .map(|class| class.as_str())
            .filter(|class| !self.predicate.accepts(class))
            .map(str::trim)
    }
}

/// A tag whose class string failed the acceptance predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Check that produced this violation
    pub check_id: CheckId,

    /// File path as produced by the traversal
    pub file: PathBuf,

    /// Physical line number (1-indexed)
    pub line: usize,

    /// Class attribute value, whitespace-trimmed
    pub class: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.file.display(), self.line, self.class)
    }
}
