//! Contact form validation.
//!
//! Every field is checked on each submission and all failures are reported
//! together, in form order, so the page can mark each offending input.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Loose address shape: something, an `@`, something, a dot, something
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email regex should be valid"));

pub const NAME_REQUIRED: &str = "Please enter your name";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MESSAGE_REQUIRED: &str = "Please enter your message";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Submitted contact form values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// A field that failed validation and the message to show next to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Validate all fields. An empty result means the form may be submitted.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: ContactField::Name,
                message: NAME_REQUIRED,
            });
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError {
                field: ContactField::Email,
                message: EMAIL_INVALID,
            });
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError {
                field: ContactField::Message,
                message: MESSAGE_REQUIRED,
            });
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let form = ContactForm::new("Ada", " ada@lab.example.org ", "Hello");
        assert!(form.is_valid());
    }

    #[test]
    fn test_every_failure_is_reported() {
        let form = ContactForm::new("  ", "not-an-email", "\n");
        let fields: Vec<ContactField> = form.validate().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@c.d"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_messages() {
        let errors = ContactForm::new("Ada", "", "Hi").validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Please enter a valid email address");
    }
}
