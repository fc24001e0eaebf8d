//! Implementation of the `promptcraft export` command.

use std::path::PathBuf;

use crate::cli::ExportArgs;
use crate::error::Result;
use crate::export::{render, write_export};

/// Execute the `export` command.
pub fn cmd_export(args: ExportArgs) -> Result<()> {
    let prompt = crate::commands::read_prompt(args.file.as_deref())?;
    let content = render(&prompt, args.format)?;

    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(args.format.default_file_name()));
    write_export(&out, &content)?;

    println!("Exported to {}", out.display());
    Ok(())
}
