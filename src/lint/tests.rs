//! Tests for the lint rubric.

use super::{Severity, lint};
use crate::prompt::StructuredPrompt;

fn well_formed() -> StructuredPrompt {
    StructuredPrompt {
        persona: "You are a senior marketing copywriter.".to_string(),
        task: "Write a launch announcement email.".to_string(),
        context: "The product is [User to insert product name].".to_string(),
        format: "Subject line plus three short paragraphs.".to_string(),
        constraints: "Friendly tone, word limit of 200.".to_string(),
    }
}

#[test]
fn well_formed_prompt_scores_100() {
    let result = lint(&well_formed());
    assert_eq!(result.score, 100);
    assert_eq!(result.count(Severity::Error), 0);
    assert_eq!(result.count(Severity::Warn), 0);
}

#[test]
fn all_empty_prompt_scores_0_with_five_errors_in_field_order() {
    let result = lint(&StructuredPrompt::default());

    assert_eq!(result.score, 0);
    assert_eq!(result.count(Severity::Error), 5);

    let error_messages: Vec<&str> = result
        .issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .map(|i| i.message.as_str())
        .collect();
    assert_eq!(
        error_messages,
        [
            "Missing persona.",
            "Missing task.",
            "Missing context.",
            "Missing format.",
            "Missing constraints.",
        ]
    );
}

#[test]
fn whitespace_only_field_counts_as_missing() {
    let sp = StructuredPrompt {
        persona: "   \n\t".to_string(),
        ..well_formed()
    };
    let result = lint(&sp);
    assert_eq!(result.count(Severity::Error), 1);
    assert_eq!(result.issues[0].message, "Missing persona.");
    assert_eq!(result.score, 75);
}

#[test]
fn task_at_limit_is_not_warned() {
    let sp = StructuredPrompt {
        task: "a".repeat(220),
        ..well_formed()
    };
    let result = lint(&sp);
    assert_eq!(result.count(Severity::Warn), 0);
    assert_eq!(result.score, 100);
}

#[test]
fn task_over_limit_draws_warning() {
    let sp = StructuredPrompt {
        task: "a".repeat(221),
        ..well_formed()
    };
    let result = lint(&sp);
    assert_eq!(result.count(Severity::Warn), 1);
    assert_eq!(result.score, 90);
    assert!(
        result
            .issues
            .iter()
            .any(|i| i.message == "Task is quite long; consider tightening.")
    );
}

#[test]
fn context_without_placeholders_draws_info() {
    let sp = StructuredPrompt {
        context: "plain background, no slots".to_string(),
        ..well_formed()
    };
    let result = lint(&sp);
    assert_eq!(result.score, 100);
    assert!(
        result
            .issues
            .iter()
            .any(|i| i.severity == Severity::Info
                && i.message == "No placeholders found in context.")
    );
}

#[test]
fn placeholder_hint_is_case_insensitive() {
    let sp = StructuredPrompt {
        context: "About [USER TO INSERT topic].".to_string(),
        ..well_formed()
    };
    let result = lint(&sp);
    assert!(
        !result
            .issues
            .iter()
            .any(|i| i.message == "No placeholders found in context.")
    );
}

#[test]
fn bare_placeholders_do_not_satisfy_the_context_check() {
    // Only the literal first-form marker counts.
    let sp = StructuredPrompt {
        context: "About [topic].".to_string(),
        ..well_formed()
    };
    let result = lint(&sp);
    assert!(
        result
            .issues
            .iter()
            .any(|i| i.message == "No placeholders found in context.")
    );
}

#[test]
fn constraints_without_tone_or_style_draw_info() {
    let sp = StructuredPrompt {
        constraints: "word limit of 100".to_string(),
        ..well_formed()
    };
    let result = lint(&sp);
    assert!(
        result
            .issues
            .iter()
            .any(|i| i.message == "Consider specifying tone/style in constraints.")
    );
}

#[test]
fn maximal_does_not_satisfy_the_length_check() {
    // "max" must be a standalone word.
    let sp = StructuredPrompt {
        constraints: "maximal formality, professional style".to_string(),
        ..well_formed()
    };
    let result = lint(&sp);
    assert!(
        result
            .issues
            .iter()
            .any(|i| i.message == "Consider setting word/length limits.")
    );
}

#[test]
fn standalone_max_satisfies_the_length_check() {
    let sp = StructuredPrompt {
        constraints: "casual tone, max 3 paragraphs".to_string(),
        ..well_formed()
    };
    let result = lint(&sp);
    assert!(
        !result
            .issues
            .iter()
            .any(|i| i.message == "Consider setting word/length limits.")
    );
}

#[test]
fn word_satisfies_the_length_check() {
    let sp = StructuredPrompt {
        constraints: "formal style, 500 words".to_string(),
        ..well_formed()
    };
    let result = lint(&sp);
    assert_eq!(result.score, 100);
}

#[test]
fn mixed_scenario_scores_65() {
    // One error (-25), one warning (-10), three infos (0).
    let sp = StructuredPrompt {
        persona: String::new(),
        task: "a".repeat(250),
        context: "no brackets here".to_string(),
        format: "f".to_string(),
        constraints: "be concise".to_string(),
    };
    let result = lint(&sp);

    assert_eq!(result.score, 65);
    assert_eq!(result.count(Severity::Error), 1);
    assert_eq!(result.count(Severity::Warn), 1);
    assert_eq!(result.count(Severity::Info), 3);

    let messages: Vec<&str> = result.issues.iter().map(|i| i.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "Missing persona.",
            "Task is quite long; consider tightening.",
            "No placeholders found in context.",
            "Consider specifying tone/style in constraints.",
            "Consider setting word/length limits.",
        ]
    );
}

#[test]
fn score_is_clamped_to_zero() {
    // 5 errors and a long task would go below zero without clamping.
    let sp = StructuredPrompt {
        task: " ".repeat(300),
        ..StructuredPrompt::default()
    };
    let result = lint(&sp);
    assert_eq!(result.score, 0);
}

#[test]
fn lint_is_deterministic() {
    let sp = well_formed();
    assert_eq!(lint(&sp), lint(&sp));
}

#[test]
fn lint_result_serializes_with_lowercase_severities() {
    let result = lint(&StructuredPrompt::default());
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"error\""));
    assert!(json.contains("\"score\":0"));
}
