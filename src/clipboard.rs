//! System clipboard access.

use arboard::Clipboard;

use crate::error::{PromptCraftError, Result};

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| PromptCraftError::ClipboardError(format!("{}", e)))?;

    clipboard
        .set_text(text)
        .map_err(|e| PromptCraftError::ClipboardError(format!("{}", e)))
}
