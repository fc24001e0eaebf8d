//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the promptcraft CLI.
///
/// Loaded from `$PROMPTCRAFT_CONFIG` or `<config_dir>/promptcraft/config.yaml`;
/// a missing file means all defaults. Unknown fields in the YAML are ignored
/// for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Generation API settings
    // =========================================================================
    /// Base URL of the generation API.
    pub api_base_url: Url,

    /// Model identifier appended to the generateContent endpoint.
    pub model: String,

    /// Name of the environment variable holding the API key.
    pub api_key_env: String,

    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,

    /// Maximum request attempts for retryable failures.
    pub max_retries: u32,

    /// Base delay between retries in milliseconds (doubled per attempt).
    pub retry_delay_ms: u64,

    // =========================================================================
    // History settings
    // =========================================================================
    /// Maximum number of entries kept in the history file.
    pub history_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            model: "gemini-1.5-flash".to_string(),
            api_key_env: "GOOGLE_API_KEY".to_string(),
            timeout_secs: 30,
            max_retries: 3,
            retry_delay_ms: 500,
            history_limit: 50,
        }
    }
}

fn default_api_base_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("default API base URL must parse")
}
