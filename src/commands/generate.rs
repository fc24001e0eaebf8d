//! Implementation of the `promptcraft generate` command.
//!
//! Resolves the use case (free-form text or a built-in template), calls the
//! generation API, lints the result, appends it to history, and prints the
//! prompt with its lint report and the placeholders found in context.

use crate::api::GenerationClient;
use crate::cli::GenerateArgs;
use crate::clipboard;
use crate::config::Config;
use crate::error::{PromptCraftError, Result};
use crate::export::to_markdown;
use crate::history::{self, HistoryEntry};
use crate::placeholder;
use crate::templates::find_template;

/// Execute the `generate` command.
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let use_case = resolve_use_case(&args)?;

    let config = Config::load_default()?;
    let client = GenerationClient::from_config(&config)?;
    let prompt = client.generate(&use_case)?;

    let report = crate::lint::lint(&prompt);

    let history_path = history::history_file_path()?;
    history::append(
        &history_path,
        HistoryEntry::new(prompt.clone(), Some(use_case.clone())),
        config.history_limit,
    )?;

    if args.json {
        let payload = serde_json::json!({
            "structured_prompt": prompt,
            "lint": report,
        });
        let json = serde_json::to_string_pretty(&payload).map_err(|e| {
            PromptCraftError::UserError(format!("failed to serialize output: {}", e))
        })?;
        println!("{}", json);
    } else {
        println!("{}", to_markdown(&prompt));
        crate::commands::print_lint_report(&report);

        let placeholders = placeholder::extract(&prompt.context);
        if !placeholders.is_empty() {
            let keys: Vec<&str> = placeholders.iter().map(|p| p.key.as_str()).collect();
            println!("Placeholders in context: {}", keys.join(", "));
        }
    }

    if args.copy {
        clipboard::copy_to_clipboard(&to_markdown(&prompt))?;
        println!("Copied to clipboard.");
    }

    Ok(())
}

/// Resolve the use case from the arguments.
fn resolve_use_case(args: &GenerateArgs) -> Result<String> {
    if let Some(id) = &args.template {
        return find_template(id)
            .map(|template| template.use_case.to_string())
            .ok_or_else(|| {
                PromptCraftError::UserError(format!(
                    "unknown template '{}'; run 'promptcraft templates' to list them",
                    id
                ))
            });
    }

    match &args.use_case {
        Some(use_case) if !use_case.trim().is_empty() => Ok(use_case.trim().to_string()),
        _ => Err(PromptCraftError::UserError(
            "provide a use case or --template <id>".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(use_case: Option<&str>, template: Option<&str>) -> GenerateArgs {
        GenerateArgs {
            use_case: use_case.map(str::to_string),
            template: template.map(str::to_string),
            copy: false,
            json: false,
        }
    }

    #[test]
    fn free_form_use_case_is_trimmed() {
        let resolved = resolve_use_case(&args(Some("  a launch email  "), None)).unwrap();
        assert_eq!(resolved, "a launch email");
    }

    #[test]
    fn template_id_expands_to_its_use_case() {
        let resolved = resolve_use_case(&args(None, Some("marketing_email"))).unwrap();
        assert_eq!(resolved, "a marketing email for a new product launch");
    }

    #[test]
    fn unknown_template_is_a_user_error() {
        let result = resolve_use_case(&args(None, Some("nope")));
        assert!(matches!(result, Err(PromptCraftError::UserError(_))));
    }

    #[test]
    fn missing_use_case_is_a_user_error() {
        assert!(resolve_use_case(&args(None, None)).is_err());
        assert!(resolve_use_case(&args(Some("   "), None)).is_err());
    }
}
