//! Regex scanner for `${cube.member}` references.
//!
//! Pushdown members carry their SQL as text, with every member reference
//! written as `${cube.member}`:
//!
//! ```text
//! return `COUNT(CASE WHEN (${orders.status} = 1) THEN 1 END)`
//! ```
//!
//! The scanner recovers those references, and for equality predicates the
//! literal on the right-hand side, without parsing the SQL.

use regex::Regex;
use std::sync::LazyLock;

/// Pattern for `${cube.member}` references.
static MEMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([a-zA-Z0-9_]+\.[a-zA-Z0-9_]+)\}").unwrap());

/// Pattern for `${cube.member} = value`; the value runs up to whitespace or `)`.
static MEMBER_VALUE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([a-zA-Z0-9_]+\.[a-zA-Z0-9_]+)\}\s*=\s*([^)\s]+)").unwrap()
});

/// Every member referenced in `text`, left to right. Duplicates are kept.
pub fn scan_members(text: &str) -> Vec<String> {
    MEMBER_PATTERN
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Every `(member, raw value)` equality pair in `text`, left to right.
///
/// Only `=` predicates are recognized; `<>`, `IN`, `LIKE` and friends
/// contribute nothing.
pub fn scan_member_values(text: &str) -> Vec<(String, String)> {
    MEMBER_VALUE_PATTERN
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}
