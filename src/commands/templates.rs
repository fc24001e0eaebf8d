//! Implementation of the `promptcraft templates` command.

use crate::error::Result;
use crate::templates::TEMPLATES;

/// Execute the `templates` command.
pub fn cmd_templates() -> Result<()> {
    for template in TEMPLATES {
        println!(
            "{:<18} {:<18} {}",
            template.id, template.label, template.use_case
        );
    }
    Ok(())
}
