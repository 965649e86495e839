//! Registry of known fields.

use super::field::{Field, FieldStatus};
use crate::rules::RuleSet;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Current value of every field, keyed by name.
pub type FormValues = BTreeMap<String, String>;

/// Known fields by name.
///
/// Fields are only ever added. Registration is idempotent on the name: the
/// first call decides the rules and later calls change nothing.
#[derive(Clone, Debug, Default)]
pub struct FieldRegistry {
    fields: BTreeMap<String, Field>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field. Returns `true` when the field is new.
    ///
    /// A missing rule set is stored as the empty rule set.
    pub fn register(&mut self, name: &str, rules: Option<RuleSet>) -> bool {
        if self.fields.contains_key(name) {
            return false;
        }
        self.fields
            .insert(name.to_string(), Field::new(rules.unwrap_or_default()));
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Rules for a field; the empty rule set when the field is unknown.
    pub fn rules(&self, name: &str) -> Arc<RuleSet> {
        self.fields
            .get(name)
            .map(|field| Arc::clone(field.rules()))
            .unwrap_or_default()
    }

    /// Current value; empty when the field is unknown.
    pub fn value(&self, name: &str) -> &str {
        self.fields.get(name).map(Field::value).unwrap_or("")
    }

    pub fn status(&self, name: &str) -> Option<FieldStatus> {
        self.fields.get(name).map(Field::status)
    }

    /// Set a field's value, registering it with no rules if needed.
    pub fn set_value(&mut self, name: &str, value: String) {
        self.register(name, None);
        if let Some(field) = self.fields.get_mut(name) {
            field.set_value(value);
        }
    }

    /// Blank every value. Names and rules are kept.
    pub fn clear_values(&mut self) {
        self.fields.values_mut().for_each(Field::clear);
    }

    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.value().to_string()))
            .collect()
    }

    /// Field names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> + '_ {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleKind;

    #[test]
    fn first_registration_wins() {
        let mut registry = FieldRegistry::new();

        assert!(registry.register("x", Some(RuleSet::builder().required("First").build())));
        assert!(!registry.register("x", Some(RuleSet::builder().email_format("Second").build())));

        let rules = registry.rules("x");
        assert_eq!(rules.kinds(), vec![RuleKind::Required]);
        assert_eq!(rules.entry(RuleKind::Required).unwrap().message(), "First");
    }

    #[test]
    fn reregistering_keeps_value() {
        let mut registry = FieldRegistry::new();
        registry.register("name", None);
        registry.set_value("name", "Ada".to_string());
        registry.register("name", None);

        assert_eq!(registry.value("name"), "Ada");
    }

    #[test]
    fn unknown_field_has_empty_rules_and_value() {
        let registry = FieldRegistry::new();
        assert!(registry.rules("ghost").is_empty());
        assert_eq!(registry.value("ghost"), "");
        assert_eq!(registry.status("ghost"), None);
    }

    #[test]
    fn set_value_registers_missing_field() {
        let mut registry = FieldRegistry::new();
        registry.set_value("late", "value".to_string());

        assert!(registry.contains("late"));
        assert!(registry.rules("late").is_empty());
        assert_eq!(registry.status("late"), Some(FieldStatus::Changed));
    }

    #[test]
    fn clear_values_keeps_names_and_rules() {
        let mut registry = FieldRegistry::new();
        registry.register("a", Some(RuleSet::builder().required("Required").build()));
        registry.register("b", None);
        registry.set_value("a", "1".to_string());
        registry.set_value("b", "2".to_string());

        registry.clear_values();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.value("a"), "");
        assert_eq!(registry.status("b"), Some(FieldStatus::Reset));
        assert!(!registry.rules("a").is_empty());
    }

    #[test]
    fn values_snapshot_covers_every_field() {
        let mut registry = FieldRegistry::new();
        registry.register("a", None);
        registry.set_value("b", "2".to_string());

        let values = registry.values();
        assert_eq!(values.len(), 2);
        assert_eq!(values["a"], "");
        assert_eq!(values["b"], "2");
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
