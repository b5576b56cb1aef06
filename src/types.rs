#![forbid(unsafe_code)]

//! Core domain types for classcheck

use serde::Serialize;
use std::fmt;

/// A validated check identifier
///
/// Check IDs must be non-empty and contain only alphanumeric characters, hyphens, and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct CheckId(String);

impl CheckId {
    /// Creates a new CheckId, validating the input
    ///
    /// Returns None if the input is empty or contains invalid characters
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            return None;
        }
        if !id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        Some(CheckId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CheckId> for String {
    fn from(id: CheckId) -> Self {
        id.0
    }
}

/// A glob pattern matched against file names
///
/// Compiled with the `globset` crate when a scan configuration is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlobPattern(String);

impl GlobPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        GlobPattern(pattern.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GlobPattern {
    fn from(pattern: &str) -> Self {
        GlobPattern(pattern.to_string())
    }
}

/// A regex fragment selecting tag names, e.g. `h[1-6]` or `button`
///
/// The fragment is spliced into the attribute regex as a capture group, so it
/// may use alternation without extra grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagPattern(String);

impl TagPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        TagPattern(pattern.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the full attribute regex source for this tag pattern
    ///
    /// The `tag` group holds the tag name and `class` the raw `className`
    /// value, so fragments with their own groups don't shift the captures.
    pub fn attribute_regex(&self) -> String {
        format!(r#"<(?P<tag>{})[^>]*className="(?P<class>[^"]*)""#, self.0)
    }
}

impl fmt::Display for TagPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TagPattern {
    fn from(pattern: &str) -> Self {
        TagPattern(pattern.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_id_validation() {
        assert!(CheckId::new("headings").is_some());
        assert!(CheckId::new("button_classes").is_some());
        assert!(CheckId::new("tt-ui").is_some());
        assert!(CheckId::new("").is_none());
        assert!(CheckId::new("two words").is_none());
        assert!(CheckId::new("bad@id").is_none());
    }

    #[test]
    fn test_check_id_serializes_as_string() {
        let id = CheckId::new("buttons").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"buttons\"");
    }

    #[test]
    fn test_attribute_regex_source() {
        let tag = TagPattern::new("h[1-6]");
        assert_eq!(
            tag.attribute_regex(),
            r#"<(?P<tag>h[1-6])[^>]*className="(?P<class>[^"]*)""#
        );
    }

    #[test]
    fn test_glob_pattern() {
        let pattern = GlobPattern::from("*.tsx");
        assert_eq!(pattern.as_str(), "*.tsx");
        assert_eq!(pattern.to_string(), "*.tsx");
    }
}
