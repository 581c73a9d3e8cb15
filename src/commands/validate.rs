use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::error::{ListViewError, Result};
use crate::validation::ContactForm;

/// Validate contact form input; fails when any field is invalid
pub fn cmd_validate_contact(
    name: &str,
    email: &str,
    message: &str,
    output_json: bool,
) -> Result<()> {
    let errors = ContactForm::new(name, email, message).validate();

    let text = if errors.is_empty() {
        "Contact form is valid".green().to_string()
    } else {
        errors
            .iter()
            .map(|e| format!("{} {}", format!("{:?}:", e.field).to_lowercase().red(), e.message))
            .collect::<Vec<_>>()
            .join("\n")
    };

    CommandOutput::new(json!({
        "valid": errors.is_empty(),
        "errors": errors,
    }))
    .with_text(text)
    .print(output_json)?;

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ListViewError::InvalidContactForm(errors.len()))
    }
}
