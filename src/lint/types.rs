//! Core types for lint results and issues.

use serde::{Deserialize, Serialize};

/// Severity of a lint finding. Only errors and warnings affect the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Advisory; does not affect the score.
    Info,
    /// Quality concern; costs 10 points.
    Warn,
    /// Missing required content; costs 25 points.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single rubric-check finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintIssue {
    /// How serious the finding is.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl LintIssue {
    /// Create a new issue.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

/// Result of linting a structured prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintResult {
    /// Quality score in `[0, 100]`.
    pub score: u8,
    /// Findings in fixed check order.
    pub issues: Vec<LintIssue>,
}

impl LintResult {
    /// Count issues of a given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }

    /// Whether any error-severity issue is present.
    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }
}
