//! Error types for the promptcraft CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for promptcraft operations.
///
/// Each variant maps to a specific exit code. The core engine (placeholder
/// extraction/filling and linting) is total and never produces these; errors
/// come from the I/O boundary: argument handling, config, the generation API,
/// and the clipboard.
#[derive(Error, Debug)]
pub enum PromptCraftError {
    /// User provided invalid arguments, unreadable input, or invalid config.
    #[error("{0}")]
    UserError(String),

    /// Lint found error-severity issues under `--strict`.
    #[error("Lint failed: {0}")]
    LintFailure(String),

    /// Generation API request failed or returned a malformed payload.
    #[error("Generation request failed: {0}")]
    ApiError(String),

    /// System clipboard could not be accessed.
    #[error("Clipboard operation failed: {0}")]
    ClipboardError(String),
}

impl PromptCraftError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptCraftError::UserError(_) => exit_codes::USER_ERROR,
            PromptCraftError::LintFailure(_) => exit_codes::LINT_FAILURE,
            PromptCraftError::ApiError(_) => exit_codes::API_FAILURE,
            PromptCraftError::ClipboardError(_) => exit_codes::CLIPBOARD_FAILURE,
        }
    }
}

/// Result type alias for promptcraft operations.
pub type Result<T> = std::result::Result<T, PromptCraftError>;
