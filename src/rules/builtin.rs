#![forbid(unsafe_code)]

//! Built-in scan configurations
//!
//! Both checks scan `*.tsx` files and differ only in the tag they look at and
//! the class names they accept.

use crate::error::ConfigError;
use crate::rules::{ClassPredicate, ScanConfig};
use crate::types::{CheckId, GlobPattern, TagPattern};

/// Glob shared by all built-in checks
pub const TSX_GLOB: &str = "*.tsx";

/// Static description of a built-in check
struct BuiltinCheck {
    id: &'static str,
    description: &'static str,
    tag: &'static str,
    accepted: &'static [&'static str],
}

const BUILTIN_CHECKS: &[BuiltinCheck] = &[
    BuiltinCheck {
        id: "headings",
        description: "Heading tags must use a tt- typography class",
        tag: "h[1-6]",
        accepted: &["tt-"],
    },
    BuiltinCheck {
        id: "buttons",
        description: "Buttons must use tt-ui, btn-primary or btn-secondary",
        tag: "button",
        accepted: &["tt-ui", "btn-primary", "btn-secondary"],
    },
];

impl BuiltinCheck {
    fn build(&self) -> Result<ScanConfig, ConfigError> {
        let id = CheckId::new(self.id)
            .ok_or_else(|| ConfigError::UnknownCheck(self.id.to_string()))?;
        ScanConfig::new(
            id,
            self.description,
            GlobPattern::new(TSX_GLOB),
            TagPattern::new(self.tag),
            ClassPredicate::contains_any(self.accepted.iter().copied()),
        )
    }
}

/// IDs of all built-in checks, in declaration order
pub fn builtin_ids() -> impl Iterator<Item = &'static str> {
    BUILTIN_CHECKS.iter().map(|check| check.id)
}

/// Looks up and compiles a built-in check by id
///
/// # Errors
///
/// Returns `ConfigError::UnknownCheck` if no built-in check has this id.
pub fn load_builtin(id: &str) -> Result<ScanConfig, ConfigError> {
    BUILTIN_CHECKS
        .iter()
        .find(|check| check.id == id)
        .ok_or_else(|| ConfigError::UnknownCheck(id.to_string()))?
        .build()
}

/// Heading check: `h1`..`h6` classes must contain `tt-`
pub fn heading_check() -> Result<ScanConfig, ConfigError> {
    load_builtin("headings")
}

/// Button check: `button` classes must contain `tt-ui`, `btn-primary` or `btn-secondary`
pub fn button_check() -> Result<ScanConfig, ConfigError> {
    load_builtin("buttons")
}
