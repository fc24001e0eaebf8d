//! Command implementations for promptcraft.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the input helpers shared by commands that read a
//! text or a prompt JSON from a file or stdin.

mod export;
mod extract;
mod fill;
mod generate;
mod history;
mod lint;
mod templates;

use std::io::Read;
use std::path::Path;

use crate::cli::Command;
use crate::error::{PromptCraftError, Result};
use crate::lint::LintResult;
use crate::prompt::StructuredPrompt;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args),
        Command::Lint(args) => lint::cmd_lint(args),
        Command::Extract(args) => extract::cmd_extract(args),
        Command::Fill(args) => fill::cmd_fill(args),
        Command::Export(args) => export::cmd_export(args),
        Command::History(history_cmd) => history::dispatch_history(history_cmd.action),
        Command::Templates => templates::cmd_templates(),
    }
}

/// Read raw text from a file, or from stdin when no file is given or the
/// file is `-`.
pub(crate) fn read_input(file: Option<&Path>) -> Result<String> {
    if let Some(path) = file
        && !is_stdin(path)
    {
        return std::fs::read_to_string(path).map_err(|e| {
            PromptCraftError::UserError(format!(
                "failed to read input file '{}': {}",
                path.display(),
                e
            ))
        });
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| PromptCraftError::UserError(format!("failed to read stdin: {}", e)))?;
    Ok(buffer)
}

/// Whether a `--file` argument names stdin.
fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

/// Read and parse a structured prompt JSON from a file or stdin.
pub(crate) fn read_prompt(file: Option<&Path>) -> Result<StructuredPrompt> {
    let content = read_input(file)?;
    serde_json::from_str(&content)
        .map_err(|e| PromptCraftError::UserError(format!("failed to parse prompt JSON: {}", e)))
}

/// Print a lint report in the human-readable layout shared by `generate`
/// and `lint`.
pub(crate) fn print_lint_report(result: &LintResult) {
    println!("Score: {}/100", result.score);
    if result.issues.is_empty() {
        println!("No issues found.");
        return;
    }
    for issue in &result.issues {
        println!("  [{}] {}", issue.severity, issue.message);
    }
}
