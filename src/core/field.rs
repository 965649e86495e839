//! A single registered field.

use crate::rules::RuleSet;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Where a field is in its lifecycle.
///
/// ```text
/// (unregistered) --register--> Registered --change--> Changed
///                                  ^                    |  ^
///                                  |                 reset |
///                                  |                    v  |
///                          register is a no-op <---- Reset --change
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    /// Registered, value untouched since.
    Registered,
    /// At least one change since registration or the last reset.
    Changed,
    /// Blanked by a form reset.
    Reset,
}

/// A field's value, its rules and its lifecycle status.
///
/// Rules are fixed at construction and shared by reference: evaluating a
/// change only needs a cheap clone of the `Arc`.
#[derive(Clone, Debug)]
pub struct Field {
    value: String,
    rules: Arc<RuleSet>,
    status: FieldStatus,
}

impl Field {
    /// A newly registered field with an empty value.
    pub fn new(rules: RuleSet) -> Self {
        Self {
            value: String::new(),
            rules: Arc::new(rules),
            status: FieldStatus::Registered,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn rules(&self) -> &Arc<RuleSet> {
        &self.rules
    }

    pub fn status(&self) -> FieldStatus {
        self.status
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
        self.status = FieldStatus::Changed;
    }

    pub(crate) fn clear(&mut self) {
        self.value.clear();
        self.status = FieldStatus::Reset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_field_is_empty_and_registered() {
        let field = Field::new(RuleSet::new());
        assert_eq!(field.value(), "");
        assert_eq!(field.status(), FieldStatus::Registered);
        assert!(field.rules().is_empty());
    }

    #[test]
    fn change_then_reset_walks_the_lifecycle() {
        let mut field = Field::new(RuleSet::builder().required("Required").build());

        field.set_value("hello".to_string());
        assert_eq!(field.value(), "hello");
        assert_eq!(field.status(), FieldStatus::Changed);

        field.clear();
        assert_eq!(field.value(), "");
        assert_eq!(field.status(), FieldStatus::Reset);
        assert!(!field.rules().is_empty());

        field.set_value("again".to_string());
        assert_eq!(field.status(), FieldStatus::Changed);
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&FieldStatus::Changed).unwrap();
        assert_eq!(json, "\"changed\"");
    }
}
