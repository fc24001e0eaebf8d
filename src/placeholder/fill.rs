//! Placeholder substitution.

use std::collections::HashMap;

use regex::Captures;

use super::pattern::{PLACEHOLDER_RX, capture_label};

/// Substitute `values` into the placeholders of `text`.
///
/// Re-applies the same bracket grammar as extraction in a single linear pass.
/// A known key is replaced with its value verbatim (no escaping); substituted
/// values are never re-scanned, so a value containing bracket syntax does not
/// recurse. An unknown key is replaced with a visible `[MISSING: <label>]`
/// marker so unresolved slots survive downstream. A match whose label trims
/// to empty passes through unchanged, mirroring extraction's skip of the
/// same degenerate bracket. Text outside brackets is untouched.
pub fn fill(text: &str, values: &HashMap<String, String>) -> String {
    PLACEHOLDER_RX
        .replace_all(text, |caps: &Captures| {
            let label = capture_label(caps);
            if label.is_empty() {
                return caps[0].to_string();
            }

            let key = super::normalize_key(label);
            match values.get(&key) {
                Some(value) => value.clone(),
                None => format!("[MISSING: {}]", label),
            }
        })
        .into_owned()
}
