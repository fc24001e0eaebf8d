//! CLI argument parsing for promptcraft.
//!
//! Uses clap derive macros for declarative argument definitions. This module
//! defines the command structure; actual implementations are in the
//! `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::export::ExportFormat;

/// PromptCraft: turn a free-form goal into a structured, reusable prompt.
///
/// Generated prompts have five sections (persona/task/context/format/
/// constraints) and mark user-fillable slots with `[User to insert ...]`
/// placeholders that `extract` and `fill` operate on.
#[derive(Parser, Debug)]
#[command(name = "promptcraft")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse arguments from the process command line.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for promptcraft.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a structured prompt from a use case.
    ///
    /// Calls the generation API, lints the result, prints it with the lint
    /// report, and appends it to history.
    Generate(GenerateArgs),

    /// Lint a structured prompt against the quality rubric.
    ///
    /// Reads prompt JSON from a file or stdin and prints the score and
    /// issues. Never fails on content unless --strict is given.
    Lint(LintArgs),

    /// List the fillable placeholders in a text or prompt section.
    Extract(ExtractArgs),

    /// Substitute values into placeholders.
    ///
    /// Unresolved slots stay visible as [MISSING: ...] markers.
    Fill(FillArgs),

    /// Export a structured prompt as Markdown or JSON.
    Export(ExportArgs),

    /// Recent-prompt history.
    History(HistoryCommand),

    /// List built-in use-case templates.
    Templates,
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// The use case to generate a prompt for.
    pub use_case: Option<String>,

    /// Use a built-in template instead of a free-form use case.
    #[arg(short, long, conflicts_with = "use_case")]
    pub template: Option<String>,

    /// Copy the rendered prompt to the clipboard.
    #[arg(long)]
    pub copy: bool,

    /// Print machine-readable JSON instead of formatted text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `lint` command.
#[derive(Parser, Debug)]
pub struct LintArgs {
    /// Prompt JSON file to lint. Reads stdin when omitted.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Exit non-zero when any error-severity issue is found.
    #[arg(long)]
    pub strict: bool,

    /// Print machine-readable JSON instead of formatted text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `extract` command.
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Input file. Reads stdin when omitted.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Treat the input as prompt JSON and scan the named section
    /// (persona, task, context, format, or constraints).
    #[arg(long)]
    pub section: Option<String>,

    /// Print machine-readable JSON instead of formatted text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `fill` command.
#[derive(Parser, Debug)]
pub struct FillArgs {
    /// Input file. Reads stdin when omitted.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Placeholder value as KEY=VALUE. Repeatable.
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Prompt on the terminal for each placeholder without a value.
    #[arg(short, long)]
    pub interactive: bool,
}

/// Arguments for the `export` command.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Prompt JSON file to export. Reads stdin when omitted.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: ExportFormat,

    /// Output path. Defaults to prompt.md / prompt.json in the current
    /// directory.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// History subcommands.
#[derive(Parser, Debug)]
pub struct HistoryCommand {
    #[command(subcommand)]
    pub action: HistoryAction,
}

/// Available history actions.
#[derive(Subcommand, Debug)]
pub enum HistoryAction {
    /// List recent prompts, newest first.
    List,

    /// Show one history entry rendered as Markdown.
    Show(HistoryShowArgs),

    /// Delete the history file.
    Clear,
}

/// Arguments for the `history show` command.
#[derive(Parser, Debug)]
pub struct HistoryShowArgs {
    /// 1-based entry number as printed by `history list`.
    pub index: usize,
}
