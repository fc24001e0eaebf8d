//! Built-in use-case starter templates.

/// A named starter use case that can be expanded by `generate --template`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseCaseTemplate {
    /// Stable identifier passed on the command line.
    pub id: &'static str,
    /// Human-readable name shown in listings.
    pub label: &'static str,
    /// The use case text sent to the generation API.
    pub use_case: &'static str,
}

/// The built-in templates.
pub const TEMPLATES: &[UseCaseTemplate] = &[
    UseCaseTemplate {
        id: "marketing_email",
        label: "Marketing Email",
        use_case: "a marketing email for a new product launch",
    },
    UseCaseTemplate {
        id: "product_spec",
        label: "Product Spec",
        use_case: "a detailed product specification document",
    },
    UseCaseTemplate {
        id: "ux_research",
        label: "UX Research Plan",
        use_case: "a UX research plan for a mobile app",
    },
    UseCaseTemplate {
        id: "job_desc",
        label: "Job Description",
        use_case: "a job description for a senior frontend engineer",
    },
];

/// Look up a template by id.
pub fn find_template(id: &str) -> Option<&'static UseCaseTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_ids_are_unique() {
        for (i, a) in TEMPLATES.iter().enumerate() {
            for (j, b) in TEMPLATES.iter().enumerate() {
                if i != j {
                    assert_ne!(a.id, b.id);
                }
            }
        }
    }

    #[test]
    fn find_template_by_id() {
        let template = find_template("marketing_email").unwrap();
        assert_eq!(template.label, "Marketing Email");
    }

    #[test]
    fn find_template_unknown_id() {
        assert!(find_template("nonsense").is_none());
    }
}
