//! Heuristic quality linting for structured prompts.
//!
//! The rubric is a fixed, ordered list of five checks with fixed severity
//! weights. Order is part of the observable contract: identical input always
//! produces the identical issue list, which reproducible tests rely on. The
//! linter never fails; missing required content is signaled through
//! error-severity issues, not through a `Result`.

mod checks;
mod types;

#[cfg(test)]
mod tests;

pub use checks::lint;
pub use types::{LintIssue, LintResult, Severity};
