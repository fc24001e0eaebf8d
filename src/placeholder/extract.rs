//! Placeholder extraction.

use std::collections::HashSet;

use super::Placeholder;
use super::pattern::{PLACEHOLDER_RX, capture_label};

/// Scan `text` and return its placeholders in first-seen order.
///
/// De-duplication is by normalized key: the first occurrence wins and keeps
/// its label text; later occurrences with the same key are consumed by the
/// scan but suppressed from the result. Matches whose label trims to empty
/// are skipped entirely. Pure function of the input; text with no bracket
/// matches yields an empty vec.
pub fn extract(text: &str) -> Vec<Placeholder> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for caps in PLACEHOLDER_RX.captures_iter(text) {
        let label = capture_label(&caps);
        if label.is_empty() {
            continue;
        }

        let key = super::normalize_key(label);
        if seen.insert(key.clone()) {
            found.push(Placeholder {
                key,
                label: label.to_string(),
            });
        }
    }

    found
}
