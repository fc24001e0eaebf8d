//! Exit code constants for the promptcraft CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 2: Lint failure (`lint --strict` with error-severity issues)
//! - 3: Generation API failure
//! - 4: Clipboard failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid config.
pub const USER_ERROR: i32 = 1;

/// Lint failure: `lint --strict` found error-severity issues.
pub const LINT_FAILURE: i32 = 2;

/// Generation API failure: request failed or the model returned a malformed payload.
pub const API_FAILURE: i32 = 3;

/// Clipboard failure: system clipboard could not be accessed.
pub const CLIPBOARD_FAILURE: i32 = 4;
