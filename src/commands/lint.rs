//! Implementation of the `promptcraft lint` command.

use crate::cli::LintArgs;
use crate::error::{PromptCraftError, Result};
use crate::lint::Severity;

/// Execute the `lint` command.
///
/// Linting itself never fails; `--strict` turns error-severity findings into
/// a non-zero exit for use in scripts.
pub fn cmd_lint(args: LintArgs) -> Result<()> {
    let prompt = crate::commands::read_prompt(args.file.as_deref())?;
    let report = crate::lint::lint(&prompt);

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| {
            PromptCraftError::UserError(format!("failed to serialize lint report: {}", e))
        })?;
        println!("{}", json);
    } else {
        crate::commands::print_lint_report(&report);
    }

    if args.strict && report.has_errors() {
        return Err(PromptCraftError::LintFailure(format!(
            "{} error issue(s)",
            report.count(Severity::Error)
        )));
    }

    Ok(())
}
