//! Prompt rendering and export.

use clap::ValueEnum;

use crate::error::{PromptCraftError, Result};
use crate::prompt::StructuredPrompt;
use std::path::Path;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Markdown with one bold header per section.
    Md,
    /// Pretty-printed JSON.
    Json,
}

impl ExportFormat {
    /// Conventional file name for this format.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ExportFormat::Md => "prompt.md",
            ExportFormat::Json => "prompt.json",
        }
    }
}

/// Render a prompt in the given format.
pub fn render(sp: &StructuredPrompt, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Md => Ok(to_markdown(sp)),
        ExportFormat::Json => to_json(sp),
    }
}

/// Render a prompt as Markdown.
///
/// Section headers are bold with trailing double-space line breaks, so the
/// output pastes cleanly into Markdown-aware tools.
pub fn to_markdown(sp: &StructuredPrompt) -> String {
    format!(
        "# Prompt\n\n\
         **Persona**  \n{}\n\n\
         **Task**  \n{}\n\n\
         **Context**  \n{}\n\n\
         **Format**  \n{}\n\n\
         **Constraints**  \n{}\n",
        sp.persona, sp.task, sp.context, sp.format, sp.constraints
    )
}

/// Render a prompt as pretty-printed JSON.
pub fn to_json(sp: &StructuredPrompt) -> Result<String> {
    serde_json::to_string_pretty(sp)
        .map_err(|e| PromptCraftError::UserError(format!("failed to serialize prompt: {}", e)))
}

/// Write rendered content to a file atomically.
pub fn write_export<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    crate::fs::atomic_write_file(path, content)
}
