//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{PromptCraftError, Result};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "PROMPTCRAFT_CONFIG";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptCraftError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PromptCraftError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptCraftError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Load the config from its default location.
    ///
    /// `$PROMPTCRAFT_CONFIG` takes precedence and must name a readable file;
    /// an explicit override that points nowhere is an error, not a silent
    /// fall-back. Without the override the platform config directory is
    /// used, where a missing file is not an error and yields defaults. An
    /// existing file that fails to parse or validate is always an error.
    pub fn load_default() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load(PathBuf::from(path));
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Validate config values and return an error on invalid values.
    ///
    /// Validation rules:
    /// - `model` and `api_key_env` must be non-empty
    /// - `timeout_secs` and `max_retries` must be positive
    /// - `history_limit` must be positive
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(PromptCraftError::UserError(
                "config validation failed: model must be non-empty".to_string(),
            ));
        }

        if self.api_key_env.trim().is_empty() {
            return Err(PromptCraftError::UserError(
                "config validation failed: api_key_env must be non-empty".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(PromptCraftError::UserError(
                "config validation failed: timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.max_retries == 0 {
            return Err(PromptCraftError::UserError(
                "config validation failed: max_retries must be greater than 0".to_string(),
            ));
        }

        if self.history_limit == 0 {
            return Err(PromptCraftError::UserError(
                "config validation failed: history_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Default config file path: `<platform config dir>/promptcraft/config.yaml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("promptcraft").join("config.yaml"))
}
