//! # Prefix & Suffix Helpers
//!
//! Predicates and normalizers for the edges of a string. The `ensure_*`
//! functions return [`Cow`] so the common already-normalized case stays
//! allocation-free.

use std::borrow::Cow;

/// Whether `haystack` begins with `needle`. An empty needle matches.
#[must_use]
pub fn starts_with(haystack: &str, needle: &str) -> bool {
    haystack.starts_with(needle)
}

/// Whether `haystack` ends with `needle`. An empty needle matches.
#[must_use]
pub fn ends_with(haystack: &str, needle: &str) -> bool {
    haystack.ends_with(needle)
}

/// Strips every trailing occurrence of `character` from `value`.
///
/// # Examples
/// ```rust
/// assert_eq!(strkit::remove_trailing('/', "path/to/dir///"), "path/to/dir");
/// ```
#[must_use]
pub fn remove_trailing(character: char, value: &str) -> &str {
    value.trim_end_matches(character)
}

/// Returns `haystack` guaranteed to begin with the first character of
/// `needle`, prepending the whole `needle` when it does not.
///
/// Only the first character of each side is compared: with a multi-character
/// `needle`, a haystack that merely shares the first character is returned
/// unchanged. Intended for single-character needles such as separators;
/// call sites rely on the single-character comparison.
///
/// # Examples
/// ```rust
/// use strkit::ensure_begins_with;
///
/// assert_eq!(ensure_begins_with("etc/hosts", "/"), "/etc/hosts");
/// assert_eq!(ensure_begins_with("/etc/hosts", "/"), "/etc/hosts");
/// assert_eq!(ensure_begins_with("", "/"), "/");
/// assert_eq!(ensure_begins_with("bar", "baz"), "bar"); // first characters match
/// ```
#[must_use]
pub fn ensure_begins_with<'a>(haystack: &'a str, needle: &str) -> Cow<'a, str> {
    if haystack.is_empty() {
        return Cow::Owned(needle.to_owned());
    }
    if haystack.chars().next() == needle.chars().next() {
        Cow::Borrowed(haystack)
    } else {
        Cow::Owned(format!("{needle}{haystack}"))
    }
}

/// Returns `haystack` guaranteed to end with the last character of `needle`,
/// appending the whole `needle` when it does not.
///
/// The counterpart of [`ensure_begins_with`]; only the last character of
/// each side is compared.
///
/// # Examples
/// ```rust
/// use strkit::ensure_ends_with;
///
/// assert_eq!(ensure_ends_with("logs", "/"), "logs/");
/// assert_eq!(ensure_ends_with("logs/", "/"), "logs/");
/// ```
#[must_use]
pub fn ensure_ends_with<'a>(haystack: &'a str, needle: &str) -> Cow<'a, str> {
    if haystack.is_empty() {
        return Cow::Owned(needle.to_owned());
    }
    if haystack.chars().next_back() == needle.chars().next_back() {
        Cow::Borrowed(haystack)
    } else {
        Cow::Owned(format!("{haystack}{needle}"))
    }
}
