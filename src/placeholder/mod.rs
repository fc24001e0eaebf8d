//! Placeholder engine: slot extraction and value substitution.
//!
//! Generated prompts mark user-fillable slots with a bracket grammar. Three
//! forms are recognized, tried in priority order at each scan position:
//!
//! 1. `[User to insert <label>]`
//! 2. `[<label> to insert]`
//! 3. `[<label>]` (bare fallback)
//!
//! The literal words are matched case-insensitively. Scanning is a single
//! left-to-right non-overlapping pass; both extraction and filling apply the
//! identical pattern so their view of a text always agrees.

mod extract;
mod fill;
mod pattern;


pub use extract::extract;
pub use fill::fill;
pub use pattern::normalize_key;

use serde::{Deserialize, Serialize};

/// A user-fillable slot discovered in generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    /// Normalized identifier derived from the label, unique within one
    /// extraction pass. Usable as a map key.
    pub key: String,
    /// The raw human-readable phrase from the source text (trimmed,
    /// original casing).
    pub label: String,
}
