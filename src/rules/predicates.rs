//! Reusable string predicates behind the built-in rules.
//!
//! Every function here is pure and total: it never panics and never
//! allocates beyond what the regex engine needs.

use once_cell::sync::Lazy;
use regex::Regex;

// One or more non-space, non-@ characters on each side of the @ and the dot.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Passes when the value is non-empty.
///
/// Whitespace counts as content: `required(" ")` passes.
///
/// # Example
///
/// ```rust
/// use formset::rules::predicates::required;
///
/// assert!(required("x"));
/// assert!(!required(""));
/// ```
pub fn required(value: &str) -> bool {
    !value.is_empty()
}

/// Passes when the value has at least `min` characters.
pub fn min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Passes when the value has at most `max` characters.
pub fn max_length(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

/// Passes for a loose `local@domain.tld` shape.
///
/// This is not RFC 5322 parsing. It only rejects values without an `@`,
/// without a dot after the `@`, or containing whitespace.
///
/// # Example
///
/// ```rust
/// use formset::rules::predicates::email_format;
///
/// assert!(email_format("a@b.c"));
/// assert!(!email_format("a@b"));
/// assert!(!email_format("a.com"));
/// ```
pub fn email_format(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}
