//! Latest validation message per field.

use std::collections::BTreeMap;

/// Field name to its current message. An empty message means no error.
pub type FormErrors = BTreeMap<String, String>;

/// Error messages by field.
///
/// An entry exists only once a field has been validated; unknown names
/// read as the empty message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorStore {
    errors: FormErrors,
}

impl ErrorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of validating a field. `None` stores the empty
    /// message.
    pub fn set(&mut self, name: &str, message: Option<String>) {
        self.errors
            .insert(name.to_string(), message.unwrap_or_default());
    }

    pub fn get(&self, name: &str) -> &str {
        self.errors.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn has_error(&self, name: &str) -> bool {
        !self.get(name).is_empty()
    }

    /// Blank every recorded message without dropping entries.
    pub fn clear_all(&mut self) {
        self.errors.values_mut().for_each(String::clear);
    }

    /// True when no recorded message is non-empty.
    pub fn is_clean(&self) -> bool {
        self.errors.values().all(String::is_empty)
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.errors.values().map(String::as_str)
    }

    pub fn all(&self) -> &FormErrors {
        &self.errors
    }
}
