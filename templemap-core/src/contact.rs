//! Contact form model and validation.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Contact form field values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub contact: bool,
    pub documentation: bool,
    pub transfer: bool,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub tel: String,
    pub notes: String,
}

/// Request body sent to the content API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub form: ContactForm,
}

/// Response of the content API to a submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitResponse {
    pub message: String,
}

impl SubmitResponse {
    pub fn is_success(&self) -> bool {
        self.message == "success"
    }
}

/// Contact form fields that can fail validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactField {
    Firstname,
    Lastname,
    Email,
}

impl ContactField {
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Firstname => "firstname",
            ContactField::Lastname => "lastname",
            ContactField::Email => "email",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required", .field.name())]
    Required { field: ContactField },

    #[error("invalid email address")]
    InvalidEmail,
}

impl ValidationError {
    pub fn field(&self) -> ContactField {
        match self {
            ValidationError::Required { field } => *field,
            ValidationError::InvalidEmail => ContactField::Email,
        }
    }

    /// Translation key of the user-facing message.
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::Required { .. } => "form.required",
            ValidationError::InvalidEmail => "form.email",
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

impl ContactForm {
    /// Check required fields and the email format. Returns every error found.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (field, value) in [
            (ContactField::Firstname, &self.firstname),
            (ContactField::Lastname, &self.lastname),
            (ContactField::Email, &self.email),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::Required { field });
            }
        }

        let email = self.email.trim();
        if !email.is_empty() && !email_regex().is_match(email) {
            errors.push(ValidationError::InvalidEmail);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// First error for a field, if any.
    pub fn error_for(errors: &[ValidationError], field: ContactField) -> Option<&ValidationError> {
        errors.iter().find(|e| e.field() == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            firstname: "Ada".into(),
            lastname: "Lovelace".into(),
            email: "ada@example.org".into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn empty_form_reports_all_required_fields() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::Required { field: ContactField::Firstname },
                ValidationError::Required { field: ContactField::Lastname },
                ValidationError::Required { field: ContactField::Email },
            ]
        );
    }

    #[test]
    fn blank_is_treated_as_missing() {
        let form = ContactForm {
            firstname: "   ".into(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            ContactForm::error_for(&errors, ContactField::Firstname),
            Some(&ValidationError::Required { field: ContactField::Firstname })
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["ada", "ada@", "ada@example", "a da@example.org"] {
            let form = ContactForm {
                email: email.into(),
                ..valid_form()
            };
            assert_eq!(form.validate(), Err(vec![ValidationError::InvalidEmail]), "{email}");
        }
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let form = ContactForm {
            tel: String::new(),
            notes: String::new(),
            ..valid_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = ValidationError::Required { field: ContactField::Lastname };
        assert_eq!(err.to_string(), "lastname is required");
        assert_eq!(ValidationError::InvalidEmail.field(), ContactField::Email);
    }

    #[test]
    fn message_keys_follow_error_kind() {
        let errors = ContactForm {
            email: "nope".into(),
            ..ContactForm::default()
        }
        .validate()
        .unwrap_err();
        let keys: Vec<_> = errors.iter().map(ValidationError::message_key).collect();
        assert_eq!(keys, vec!["form.required", "form.required", "form.email"]);
    }

    #[test]
    fn submit_response_success() {
        let ok: SubmitResponse = serde_json::from_str(r#"{"message": "success"}"#).unwrap();
        let ko: SubmitResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(ok.is_success());
        assert!(!ko.is_success());
    }

    #[test]
    fn submission_wraps_form() {
        let json = serde_json::to_value(ContactSubmission { form: valid_form() }).unwrap();
        assert_eq!(json["form"]["email"], "ada@example.org");
        assert_eq!(json["form"]["contact"], false);
    }
}
