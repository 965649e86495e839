//! Error types.
//!
//! Validation failures are not errors in this crate: they are messages
//! stored per field. `FormError` covers misuse of the API and malformed
//! declarations; `FieldViolation` is the item type when several fields'
//! failures are reported together.

use thiserror::Error;

/// Errors returned by form and rule-set operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormError {
    #[error("Field '{name}' received a change before it was registered")]
    UnregisteredField { name: String },

    #[error("Unknown rule identifier '{0}'")]
    UnknownRule(String),

    #[error("Invalid rule declaration: {0}")]
    InvalidRules(String),

    #[error("Invalid form configuration: {0}")]
    InvalidConfig(String),
}

/// A failing rule on one field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_readable_messages() {
        let err = FormError::UnregisteredField {
            name: "email".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Field 'email' received a change before it was registered"
        );
        assert_eq!(
            FormError::UnknownRule("pattern".to_string()).to_string(),
            "Unknown rule identifier 'pattern'"
        );
    }

    #[test]
    fn violation_displays_field_and_message() {
        let violation = FieldViolation {
            field: "email".to_string(),
            message: "Required".to_string(),
        };
        assert_eq!(violation.to_string(), "email: Required");
    }
}
