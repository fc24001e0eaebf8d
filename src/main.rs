//! PromptCraft: turn free-form goals into structured, reusable prompt templates.
//!
//! This is the main entry point for the `promptcraft` CLI. It parses
//! arguments, dispatches to the appropriate command handler, and handles
//! errors with proper exit codes.

mod api;
mod cli;
mod clipboard;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod export;
pub mod fs;
pub mod history;
pub mod lint;
pub mod placeholder;
pub mod prompt;
pub mod templates;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
