//! Bounded recent-prompt history.
//!
//! Generated prompts are appended to a JSON history file, newest first,
//! capped at the configured limit. Each entry carries an RFC3339 timestamp
//! and an actor string (`user@HOST`) so shared machines can tell entries
//! apart. The file lives under `$PROMPTCRAFT_HOME` when set, otherwise the
//! platform data directory.

use crate::error::{PromptCraftError, Result};
use crate::prompt::StructuredPrompt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the history directory.
pub const HISTORY_ENV: &str = "PROMPTCRAFT_HOME";

/// A single saved generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the prompt was generated.
    pub ts: DateTime<Utc>,

    /// Who generated it (e.g. `user@HOST`).
    pub actor: String,

    /// The use case the prompt was generated from, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_case: Option<String>,

    /// The generated prompt.
    pub prompt: StructuredPrompt,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time and actor.
    pub fn new(prompt: StructuredPrompt, use_case: Option<String>) -> Self {
        Self {
            ts: Utc::now(),
            actor: actor_string(),
            use_case,
            prompt,
        }
    }
}

/// Get the actor string for history metadata.
fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Resolve the history file path.
pub fn history_file_path() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HISTORY_ENV) {
        return Ok(PathBuf::from(home).join("history.json"));
    }

    dirs::data_dir()
        .map(|dir| dir.join("promptcraft").join("history.json"))
        .ok_or_else(|| {
            PromptCraftError::UserError(
                "could not determine a data directory for history; set PROMPTCRAFT_HOME"
                    .to_string(),
            )
        })
}

/// Load history entries, newest first. A missing file is an empty history.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<HistoryEntry>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        PromptCraftError::UserError(format!(
            "failed to read history file '{}': {}",
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        PromptCraftError::UserError(format!(
            "failed to parse history file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Prepend an entry and persist, dropping the oldest entries past `limit`.
pub fn append<P: AsRef<Path>>(path: P, entry: HistoryEntry, limit: usize) -> Result<()> {
    let path = path.as_ref();

    let mut entries = load(path)?;
    entries.insert(0, entry);
    entries.truncate(limit);

    save(path, &entries)
}

/// Remove the history file. Succeeds if it does not exist.
pub fn clear<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(());
    }

    std::fs::remove_file(path).map_err(|e| {
        PromptCraftError::UserError(format!(
            "failed to remove history file '{}': {}",
            path.display(),
            e
        ))
    })
}

fn save(path: &Path, entries: &[HistoryEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries).map_err(|e| {
        PromptCraftError::UserError(format!("failed to serialize history: {}", e))
    })?;

    crate::fs::atomic_write_file(path, &json)
}
