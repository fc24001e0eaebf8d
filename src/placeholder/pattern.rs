//! The shared bracket pattern and key normalization.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// The bracket grammar as a single alternation. Alternatives are ordered by
/// priority; the regex engine prefers earlier branches at each match site, so
/// `[User to insert name]` binds to the first form rather than the bare
/// fallback. Non-overlapping leftmost matching comes from the scan itself.
pub(super) static PLACEHOLDER_RX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[(?:user\s+to\s+insert\s+([^\]]+)|([^\]]+?)\s+to\s+insert|([^\]]+?))\]")
        .expect("placeholder pattern must compile")
});

/// Pull the trimmed label out of a match, whichever form captured it.
pub(super) fn capture_label<'t>(caps: &Captures<'t>) -> &'t str {
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str().trim())
        .unwrap_or("")
}

/// Map a free-text label to a stable identifier.
///
/// Trims, lowercases, collapses every run of non-alphanumeric characters to a
/// single `_`, and strips leading/trailing separators. Total: defined for
/// every input, including the empty string (which yields an empty key).
pub fn normalize_key(label: &str) -> String {
    let mut key = String::with_capacity(label.len());
    let mut pending_separator = false;
    for ch in label.trim().to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !key.is_empty() {
                key.push('_');
            }
            pending_separator = false;
            key.push(ch);
        } else {
            pending_separator = true;
        }
    }
    key
}
