//! Implementation of the `promptcraft extract` command.

use crate::cli::ExtractArgs;
use crate::error::{PromptCraftError, Result};
use crate::placeholder;
use crate::prompt::FIELD_NAMES;

/// Execute the `extract` command.
///
/// Without `--section` the input is raw text; with it, the input is prompt
/// JSON and only the named section is scanned.
pub fn cmd_extract(args: ExtractArgs) -> Result<()> {
    let text = match &args.section {
        Some(section) => {
            let prompt = crate::commands::read_prompt(args.file.as_deref())?;
            prompt
                .section(section)
                .ok_or_else(|| {
                    PromptCraftError::UserError(format!(
                        "unknown section '{}'; expected one of: {}",
                        section,
                        FIELD_NAMES.join(", ")
                    ))
                })?
                .to_string()
        }
        None => crate::commands::read_input(args.file.as_deref())?,
    };

    let placeholders = placeholder::extract(&text);

    if args.json {
        let json = serde_json::to_string_pretty(&placeholders).map_err(|e| {
            PromptCraftError::UserError(format!("failed to serialize placeholders: {}", e))
        })?;
        println!("{}", json);
    } else if placeholders.is_empty() {
        println!("No placeholders found.");
    } else {
        for placeholder in &placeholders {
            println!("{}\t{}", placeholder.key, placeholder.label);
        }
    }

    Ok(())
}
