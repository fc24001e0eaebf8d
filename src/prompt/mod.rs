//! The structured prompt model shared by the extractor, filler, and linter.
//!
//! A structured prompt is exactly five named plain-text sections. It is an
//! immutable value: components that need a modified copy clone it and replace
//! whole fields, never edit in place.

use serde::{Deserialize, Serialize};

/// Section names in declared order. Lint checks and rendering both follow
/// this order.
pub const FIELD_NAMES: [&str; 5] = ["persona", "task", "context", "format", "constraints"];

/// A five-section structured prompt.
///
/// All fields are plain text and may be empty until validated by the linter.
/// Unknown fields are rejected on deserialization so the record shape stays
/// exactly these five sections; missing fields deserialize as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StructuredPrompt {
    /// The persona the downstream model should adopt.
    pub persona: String,
    /// The primary objective.
    pub task: String,
    /// Background information, typically carrying `[User to insert ...]` slots.
    pub context: String,
    /// The expected output format.
    pub format: String,
    /// Rules and limitations (tone, style, length).
    pub constraints: String,
}

impl StructuredPrompt {
    /// Iterate the sections as `(name, value)` pairs in declared order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("persona", self.persona.as_str()),
            ("task", self.task.as_str()),
            ("context", self.context.as_str()),
            ("format", self.format.as_str()),
            ("constraints", self.constraints.as_str()),
        ]
    }

    /// Look up a section by name. Returns `None` for unknown names.
    pub fn section(&self, name: &str) -> Option<&str> {
        self.fields()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }
}
