//! The five-check rubric.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{LintIssue, LintResult, Severity};
use crate::prompt::StructuredPrompt;

/// Tasks longer than this many characters draw a warning.
const TASK_LENGTH_LIMIT: usize = 220;

/// Score penalty per error-severity issue.
const ERROR_PENALTY: i32 = 25;

/// Score penalty per warn-severity issue.
const WARN_PENALTY: i32 = 10;

/// A context section should carry at least one first-form placeholder.
static PLACEHOLDER_HINT_RX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[user to insert").expect("pattern must compile"));

/// Constraints should pin down tone or style.
static TONE_STYLE_RX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)tone|style").expect("pattern must compile"));

/// Constraints should set a length limit. `max` and `word(s)` only count as
/// standalone words so e.g. "maximal" does not satisfy the check.
static LENGTH_LIMIT_RX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)limit|under|\bmax\b|\bwords?\b").expect("pattern must compile"));

/// Lint a structured prompt against the fixed rubric.
///
/// Checks run in fixed order: required fields (one error per missing field,
/// in declared field order), task length, placeholder presence in context,
/// tone/style in constraints, length limits in constraints. Deterministic and
/// pure; always returns a result.
pub fn lint(sp: &StructuredPrompt) -> LintResult {
    let mut issues = Vec::new();

    for (name, value) in sp.fields() {
        if value.trim().is_empty() {
            issues.push(LintIssue::new(
                Severity::Error,
                format!("Missing {}.", name),
            ));
        }
    }

    if sp.task.chars().count() > TASK_LENGTH_LIMIT {
        issues.push(LintIssue::new(
            Severity::Warn,
            "Task is quite long; consider tightening.",
        ));
    }

    if !PLACEHOLDER_HINT_RX.is_match(&sp.context) {
        issues.push(LintIssue::new(
            Severity::Info,
            "No placeholders found in context.",
        ));
    }

    if !TONE_STYLE_RX.is_match(&sp.constraints) {
        issues.push(LintIssue::new(
            Severity::Info,
            "Consider specifying tone/style in constraints.",
        ));
    }

    if !LENGTH_LIMIT_RX.is_match(&sp.constraints) {
        issues.push(LintIssue::new(
            Severity::Info,
            "Consider setting word/length limits.",
        ));
    }

    LintResult {
        score: score_for(&issues),
        issues,
    }
}

/// Score from 100 down, 25 per error and 10 per warning, clamped to [0, 100].
fn score_for(issues: &[LintIssue]) -> u8 {
    let mut score: i32 = 100;
    for issue in issues {
        score -= match issue.severity {
            Severity::Error => ERROR_PENALTY,
            Severity::Warn => WARN_PENALTY,
            Severity::Info => 0,
        };
    }
    score.clamp(0, 100) as u8
}
