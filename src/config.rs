//! Form configuration.
//!
//! Every field has a default, so an empty JSON object is a complete
//! configuration.

use crate::error::FormError;
use serde::{Deserialize, Serialize};

/// How the `maxLength` rule compares the value length with its bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxLengthSemantics {
    /// Pass when the length is at most the bound.
    #[default]
    AtMost,

    /// Pass when the length is at least the bound. Earlier releases routed
    /// `maxLength` through the minimum-length check; this keeps that
    /// behavior available for forms that depend on it.
    Legacy,
}

/// What a change event for a field that was never registered does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnregisteredChange {
    /// Register the field with an empty rule set, then apply the change.
    #[default]
    Register,

    /// Return `FormError::UnregisteredField` and leave the form untouched.
    Reject,
}

/// Behavior switches for a form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub max_length: MaxLengthSemantics,
    pub unregistered_change: UnregisteredChange,
}

impl FormConfig {
    /// Parse a configuration from JSON. Missing keys take their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formset::config::{FormConfig, MaxLengthSemantics, UnregisteredChange};
    ///
    /// let config = FormConfig::from_json(r#"{"unregistered_change": "reject"}"#).unwrap();
    /// assert_eq!(config.unregistered_change, UnregisteredChange::Reject);
    /// assert_eq!(config.max_length, MaxLengthSemantics::AtMost);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        serde_json::from_str(json).map_err(|e| FormError::InvalidConfig(e.to_string()))
    }

    pub fn with_max_length(mut self, semantics: MaxLengthSemantics) -> Self {
        self.max_length = semantics;
        self
    }

    pub fn with_unregistered_change(mut self, policy: UnregisteredChange) -> Self {
        self.unregistered_change = policy;
        self
    }
}
