//! Implementation of the `promptcraft fill` command.

use std::collections::HashMap;

use dialoguer::Input;

use crate::cli::FillArgs;
use crate::error::{PromptCraftError, Result};
use crate::placeholder;

/// Execute the `fill` command.
///
/// Values come from repeated `--set KEY=VALUE` arguments; with
/// `--interactive`, any extracted placeholder without a value is asked for on
/// the terminal. Slots still unresolved after that stay visible as
/// `[MISSING: ...]` markers in the output.
pub fn cmd_fill(args: FillArgs) -> Result<()> {
    let text = crate::commands::read_input(args.file.as_deref())?;
    let mut values = parse_values(&args.set)?;

    if args.interactive {
        for placeholder in placeholder::extract(&text) {
            if values.contains_key(&placeholder.key) {
                continue;
            }

            let value: String = Input::new()
                .with_prompt(placeholder.label.clone())
                .allow_empty(true)
                .interact_text()
                .map_err(|e| {
                    PromptCraftError::UserError(format!("interactive input failed: {}", e))
                })?;
            values.insert(placeholder.key, value);
        }
    }

    print!("{}", placeholder::fill(&text, &values));

    Ok(())
}

/// Parse `KEY=VALUE` pairs into a value map. Keys are trimmed; values are
/// taken verbatim (an empty value is allowed).
fn parse_values(pairs: &[String]) -> Result<HashMap<String, String>> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(key, value)| (key.trim().to_string(), value.to_string()))
                .ok_or_else(|| {
                    PromptCraftError::UserError(format!(
                        "invalid --set '{}': expected KEY=VALUE",
                        pair
                    ))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_key_value_pairs() {
        let values = parse_values(&pairs(&["name=Alice", "city=Berlin"])).unwrap();
        assert_eq!(values.get("name").unwrap(), "Alice");
        assert_eq!(values.get("city").unwrap(), "Berlin");
    }

    #[test]
    fn value_may_contain_equals_signs() {
        let values = parse_values(&pairs(&["query=a=b=c"])).unwrap();
        assert_eq!(values.get("query").unwrap(), "a=b=c");
    }

    #[test]
    fn empty_value_is_allowed() {
        let values = parse_values(&pairs(&["note="])).unwrap();
        assert_eq!(values.get("note").unwrap(), "");
    }

    #[test]
    fn missing_equals_is_a_user_error() {
        assert!(parse_values(&pairs(&["just_a_key"])).is_err());
    }

    #[test]
    fn keys_are_trimmed() {
        let values = parse_values(&pairs(&[" name =x"])).unwrap();
        assert!(values.contains_key("name"));
    }
}
