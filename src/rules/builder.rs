//! Builder API for declaring rule sets.

use crate::rules::custom::CustomValidator;
use crate::rules::declaration::{RuleEntry, RuleKind, RuleSet, RuleValue};

/// Builder for creating rule sets.
///
/// Declaring the same rule twice keeps the later declaration.
pub struct RuleSetBuilder {
    rules: RuleSet,
}

impl RuleSetBuilder {
    pub fn new() -> Self {
        Self {
            rules: RuleSet::new(),
        }
    }

    /// Fail when the value is empty
    pub fn required(self, message: impl Into<String>) -> Self {
        self.rule(RuleKind::Required, RuleEntry::Message(message.into()))
    }

    /// Fail unless the value looks like `local@domain.tld`
    pub fn email_format(self, message: impl Into<String>) -> Self {
        self.rule(RuleKind::EmailFormat, RuleEntry::Message(message.into()))
    }

    /// Fail when the value has fewer than `min` characters
    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.rule(RuleKind::MinLength, RuleEntry::with_value(message, min))
    }

    /// Fail when the value exceeds `max` characters
    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.rule(RuleKind::MaxLength, RuleEntry::with_value(message, max))
    }

    /// Declare a built-in rule from a raw entry.
    ///
    /// `RuleKind::Validate` has no data form; use [`validate`](Self::validate).
    /// Passing it here is ignored.
    pub fn rule(mut self, kind: RuleKind, entry: impl Into<RuleEntry>) -> Self {
        match self.rules.slot_mut(kind) {
            Some(slot) => *slot = Some(entry.into()),
            None => tracing::warn!(rule = %kind, "rule has no declarative form; ignored"),
        }
        self
    }

    /// Declare a built-in rule with an explicit parameter.
    pub fn rule_with_value(
        self,
        kind: RuleKind,
        message: impl Into<String>,
        value: impl Into<RuleValue>,
    ) -> Self {
        self.rule(kind, RuleEntry::with_value(message, value))
    }

    /// Add a custom check. It runs before every built-in rule.
    pub fn validate<F>(mut self, check: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.rules.validate = Some(CustomValidator::new(check));
        self
    }

    /// Build the rule set
    pub fn build(self) -> RuleSet {
        self.rules
    }
}

impl Default for RuleSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_declares_each_rule() {
        let rules = RuleSetBuilder::new()
            .required("Required")
            .email_format("Bad email")
            .min_length(3, "Too short")
            .max_length(10, "Too long")
            .validate(|_| None)
            .build();

        assert_eq!(rules.kinds(), RuleKind::PRIORITY.to_vec());
        assert_eq!(
            rules.entry(RuleKind::MinLength).and_then(|e| e.value()),
            Some(&RuleValue::Number(3))
        );
        assert_eq!(rules.entry(RuleKind::MaxLength).unwrap().message(), "Too long");
    }

    #[test]
    fn later_declaration_replaces_earlier() {
        let rules = RuleSetBuilder::new()
            .required("First")
            .required("Second")
            .build();

        assert_eq!(rules.entry(RuleKind::Required).unwrap().message(), "Second");
    }

    #[test]
    fn validate_kind_is_ignored_by_rule() {
        let rules = RuleSetBuilder::new()
            .rule(RuleKind::Validate, "not a function")
            .build();

        assert!(rules.is_empty());
    }

    #[test]
    fn rule_with_value_accepts_text_parameter() {
        let rules = RuleSetBuilder::new()
            .rule_with_value(RuleKind::MinLength, "Too short", "4")
            .build();

        let value = rules.entry(RuleKind::MinLength).and_then(|e| e.value());
        assert_eq!(value.and_then(RuleValue::as_length), Some(4));
    }

    #[test]
    fn default_builder_is_empty() {
        assert!(RuleSetBuilder::default().build().is_empty());
    }
}
