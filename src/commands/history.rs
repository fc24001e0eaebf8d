//! Implementation of the `promptcraft history` commands.

use crate::cli::{HistoryAction, HistoryShowArgs};
use crate::error::{PromptCraftError, Result};
use crate::export::to_markdown;
use crate::history;

/// Dispatch history subcommands.
pub fn dispatch_history(action: HistoryAction) -> Result<()> {
    match action {
        HistoryAction::List => cmd_list(),
        HistoryAction::Show(args) => cmd_show(args),
        HistoryAction::Clear => cmd_clear(),
    }
}

fn cmd_list() -> Result<()> {
    let path = history::history_file_path()?;
    let entries = history::load(&path)?;

    if entries.is_empty() {
        println!("History is empty.");
        return Ok(());
    }

    for (i, entry) in entries.iter().enumerate() {
        println!(
            "{:>3}. {}  {}  {}",
            i + 1,
            entry.ts.format("%Y-%m-%d %H:%M"),
            entry.actor,
            preview(&entry.prompt.task, 60)
        );
    }

    Ok(())
}

fn cmd_show(args: HistoryShowArgs) -> Result<()> {
    let path = history::history_file_path()?;
    let entries = history::load(&path)?;

    let entry = args
        .index
        .checked_sub(1)
        .and_then(|i| entries.get(i))
        .ok_or_else(|| {
            PromptCraftError::UserError(format!(
                "no history entry {} (history has {} entries)",
                args.index,
                entries.len()
            ))
        })?;

    if let Some(use_case) = &entry.use_case {
        println!("Use case: {}\n", use_case);
    }
    println!("{}", to_markdown(&entry.prompt));

    Ok(())
}

fn cmd_clear() -> Result<()> {
    let path = history::history_file_path()?;
    history::clear(&path)?;
    println!("History cleared.");
    Ok(())
}

/// Truncate a task line for listing.
fn preview(text: &str, max_chars: usize) -> String {
    let line = text.lines().next().unwrap_or("");
    if line.chars().count() <= max_chars {
        return line.to_string();
    }
    let truncated: String = line.chars().take(max_chars).collect();
    format!("{}...", truncated)
}
