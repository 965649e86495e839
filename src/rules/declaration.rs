//! Rule identifiers and per-field rule sets.

use crate::error::FormError;
use crate::rules::builder::RuleSetBuilder;
use crate::rules::custom::CustomValidator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of rule identifiers.
///
/// Variant order is evaluation priority: the custom validator runs first,
/// then the built-ins in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    Validate,
    Required,
    EmailFormat,
    MinLength,
    MaxLength,
}

impl RuleKind {
    /// Every identifier, in evaluation priority order.
    pub const PRIORITY: [RuleKind; 5] = [
        RuleKind::Validate,
        RuleKind::Required,
        RuleKind::EmailFormat,
        RuleKind::MinLength,
        RuleKind::MaxLength,
    ];

    /// The identifier as written in rule declarations.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::Required => "required",
            Self::EmailFormat => "emailFormat",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
        }
    }

    /// Built-in rules are declared as data and dispatched to a predicate.
    pub fn is_built_in(&self) -> bool {
        !matches!(self, Self::Validate)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleKind::PRIORITY
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FormError::UnknownRule(s.to_string()))
    }
}

/// Parameter attached to a rule, such as the bound of a length rule.
///
/// JSON numbers that are not non-negative integers (`3.0`, `-1`, `2.5`)
/// land in `Decimal`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Number(u64),
    Decimal(f64),
    Text(String),
}

impl RuleValue {
    /// Interpret the parameter as a character count.
    ///
    /// Text parameters are parsed after trimming and decimals must be whole;
    /// anything that is not a non-negative integer yields `None`.
    pub fn as_length(&self) -> Option<usize> {
        match self {
            Self::Number(n) => usize::try_from(*n).ok(),
            Self::Decimal(d) if d.is_finite() && *d >= 0.0 && d.fract() == 0.0 => {
                usize::try_from(*d as u64).ok()
            }
            Self::Decimal(_) => None,
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<usize> for RuleValue {
    fn from(n: usize) -> Self {
        RuleValue::Number(n as u64)
    }
}

impl From<&str> for RuleValue {
    fn from(s: &str) -> Self {
        RuleValue::Text(s.to_string())
    }
}

impl From<String> for RuleValue {
    fn from(s: String) -> Self {
        RuleValue::Text(s)
    }
}

/// A message with an optional parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleInformation {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<RuleValue>,
}

/// Declaration of a built-in rule: a bare message or a message with a
/// parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleEntry {
    Message(String),
    Detailed(RuleInformation),
}

impl RuleEntry {
    /// Entry carrying a parameter.
    pub fn with_value(message: impl Into<String>, value: impl Into<RuleValue>) -> Self {
        RuleEntry::Detailed(RuleInformation {
            message: message.into(),
            value: Some(value.into()),
        })
    }

    /// Error message reported when the rule fails.
    pub fn message(&self) -> &str {
        match self {
            Self::Message(message) => message,
            Self::Detailed(info) => &info.message,
        }
    }

    /// The parameter, if one was declared.
    pub fn value(&self) -> Option<&RuleValue> {
        match self {
            Self::Message(_) => None,
            Self::Detailed(info) => info.value.as_ref(),
        }
    }
}

impl From<&str> for RuleEntry {
    fn from(message: &str) -> Self {
        RuleEntry::Message(message.to_string())
    }
}

impl From<String> for RuleEntry {
    fn from(message: String) -> Self {
        RuleEntry::Message(message)
    }
}

impl From<RuleInformation> for RuleEntry {
    fn from(info: RuleInformation) -> Self {
        RuleEntry::Detailed(info)
    }
}

/// Rules attached to one field.
///
/// A rule set holds at most one declaration per identifier and is never
/// modified once attached to a field. The empty rule set is a valid value
/// and always passes.
///
/// # Example
///
/// ```rust
/// use formset::rules::{RuleKind, RuleSet};
///
/// let rules = RuleSet::builder()
///     .min_length(8, "At least 8 characters")
///     .required("Required")
///     .build();
///
/// // Evaluation order is fixed, not declaration order.
/// assert_eq!(rules.kinds(), vec![RuleKind::Required, RuleKind::MinLength]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    pub(crate) validate: Option<CustomValidator>,
    pub(crate) required: Option<RuleEntry>,
    pub(crate) email_format: Option<RuleEntry>,
    pub(crate) min_length: Option<RuleEntry>,
    pub(crate) max_length: Option<RuleEntry>,
}

impl RuleSet {
    /// An empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::new()
    }

    /// Parse a JSON object of declarations.
    ///
    /// Keys are rule identifiers; values are either a message string or a
    /// `{"message": ..., "value": ...}` object. A length parameter may be an
    /// integer, a whole decimal such as `3.0`, or a numeric string; any other
    /// parameter makes the rule fail when checked. The `validate` identifier
    /// holds code and cannot be declared this way.
    ///
    /// # Example
    ///
    /// ```rust
    /// use formset::rules::{RuleKind, RuleSet};
    ///
    /// let rules = RuleSet::from_json(
    ///     r#"{"required": "Required", "minLength": {"message": "Too short", "value": 3}}"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(rules.kinds(), vec![RuleKind::Required, RuleKind::MinLength]);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        let raw: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| FormError::InvalidRules(e.to_string()))?;

        let mut rules = RuleSet::new();
        for (key, value) in raw {
            let kind: RuleKind = key.parse()?;
            let entry: RuleEntry = serde_json::from_value(value)
                .map_err(|e| FormError::InvalidRules(format!("{kind}: {e}")))?;
            let slot = rules.slot_mut(kind).ok_or_else(|| {
                FormError::InvalidRules(format!("'{kind}' takes a function and cannot be parsed"))
            })?;
            *slot = Some(entry);
        }
        Ok(rules)
    }

    /// True when no rule of any kind is declared.
    pub fn is_empty(&self) -> bool {
        self.validate.is_none() && self.checks().next().is_none()
    }

    /// Declared identifiers, in evaluation order.
    pub fn kinds(&self) -> Vec<RuleKind> {
        RuleKind::PRIORITY
            .into_iter()
            .filter(|kind| match kind {
                RuleKind::Validate => self.validate.is_some(),
                other => self.entry(*other).is_some(),
            })
            .collect()
    }

    /// The custom validator, if one is declared.
    pub fn custom(&self) -> Option<&CustomValidator> {
        self.validate.as_ref()
    }

    /// The declaration for a built-in identifier. Always `None` for
    /// `validate`.
    pub fn entry(&self, kind: RuleKind) -> Option<&RuleEntry> {
        match kind {
            RuleKind::Validate => None,
            RuleKind::Required => self.required.as_ref(),
            RuleKind::EmailFormat => self.email_format.as_ref(),
            RuleKind::MinLength => self.min_length.as_ref(),
            RuleKind::MaxLength => self.max_length.as_ref(),
        }
    }

    /// Declared built-in rules in evaluation order.
    pub fn checks(&self) -> impl Iterator<Item = (RuleKind, &RuleEntry)> + '_ {
        RuleKind::PRIORITY
            .into_iter()
            .filter_map(move |kind| self.entry(kind).map(|entry| (kind, entry)))
    }

    pub(crate) fn slot_mut(&mut self, kind: RuleKind) -> Option<&mut Option<RuleEntry>> {
        match kind {
            RuleKind::Validate => None,
            RuleKind::Required => Some(&mut self.required),
            RuleKind::EmailFormat => Some(&mut self.email_format),
            RuleKind::MinLength => Some(&mut self.min_length),
            RuleKind::MaxLength => Some(&mut self.max_length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_kind_parses_known_identifiers() {
        for kind in RuleKind::PRIORITY {
            assert_eq!(kind.as_str().parse::<RuleKind>().unwrap(), kind);
        }
    }

    #[test]
    fn rule_kind_rejects_unknown_identifier() {
        let err = "pattern".parse::<RuleKind>().unwrap_err();
        assert_eq!(err, FormError::UnknownRule("pattern".to_string()));
    }

    #[test]
    fn rule_kind_order_is_priority() {
        let mut kinds = vec![
            RuleKind::MaxLength,
            RuleKind::Required,
            RuleKind::Validate,
            RuleKind::MinLength,
            RuleKind::EmailFormat,
        ];
        kinds.sort();
        assert_eq!(kinds, RuleKind::PRIORITY.to_vec());
    }

    #[test]
    fn rule_value_as_length() {
        assert_eq!(RuleValue::Number(4).as_length(), Some(4));
        assert_eq!(RuleValue::Text(" 12 ".to_string()).as_length(), Some(12));
        assert_eq!(RuleValue::Text("-1".to_string()).as_length(), None);
        assert_eq!(RuleValue::Text("many".to_string()).as_length(), None);
        assert_eq!(RuleValue::Decimal(3.0).as_length(), Some(3));
        assert_eq!(RuleValue::Decimal(2.5).as_length(), None);
        assert_eq!(RuleValue::Decimal(-1.0).as_length(), None);
    }

    #[test]
    fn from_json_accepts_whole_decimal_parameter() {
        let rules =
            RuleSet::from_json(r#"{"minLength": {"message": "Too short", "value": 3.0}}"#)
                .unwrap();

        let value = rules.entry(RuleKind::MinLength).and_then(RuleEntry::value);
        assert_eq!(value, Some(&RuleValue::Decimal(3.0)));
        assert_eq!(value.and_then(RuleValue::as_length), Some(3));
    }

    #[test]
    fn entry_message_and_value() {
        let bare = RuleEntry::from("Required");
        assert_eq!(bare.message(), "Required");
        assert_eq!(bare.value(), None);

        let detailed = RuleEntry::with_value("Too short", 3);
        assert_eq!(detailed.message(), "Too short");
        assert_eq!(detailed.value(), Some(&RuleValue::Number(3)));
    }

    #[test]
    fn entry_deserializes_both_shapes() {
        let bare: RuleEntry = serde_json::from_str(r#""Required""#).unwrap();
        assert_eq!(bare, RuleEntry::Message("Required".to_string()));

        let detailed: RuleEntry =
            serde_json::from_str(r#"{"message": "Too long", "value": "10"}"#).unwrap();
        assert_eq!(detailed.value().and_then(RuleValue::as_length), Some(10));

        let no_value: RuleEntry = serde_json::from_str(r#"{"message": "Too long"}"#).unwrap();
        assert_eq!(no_value.value(), None);
    }

    #[test]
    fn from_json_builds_rule_set() {
        let rules = RuleSet::from_json(
            r#"{"maxLength": {"message": "Too long", "value": 5}, "emailFormat": "Bad email"}"#,
        )
        .unwrap();

        assert_eq!(rules.kinds(), vec![RuleKind::EmailFormat, RuleKind::MaxLength]);
        assert_eq!(rules.entry(RuleKind::EmailFormat).unwrap().message(), "Bad email");
        assert!(rules.custom().is_none());
    }

    #[test]
    fn from_json_rejects_unknown_identifier() {
        let err = RuleSet::from_json(r#"{"pattern": "Nope"}"#).unwrap_err();
        assert_eq!(err, FormError::UnknownRule("pattern".to_string()));
    }

    #[test]
    fn from_json_rejects_validate() {
        let err = RuleSet::from_json(r#"{"validate": "x"}"#).unwrap_err();
        assert!(matches!(err, FormError::InvalidRules(_)));
    }

    #[test]
    fn from_json_rejects_malformed_input() {
        assert!(matches!(
            RuleSet::from_json("[1, 2]"),
            Err(FormError::InvalidRules(_))
        ));
        assert!(matches!(
            RuleSet::from_json(r#"{"required": 42}"#),
            Err(FormError::InvalidRules(_))
        ));
    }

    #[test]
    fn empty_rule_set_has_no_kinds() {
        let rules = RuleSet::new();
        assert!(rules.is_empty());
        assert!(rules.kinds().is_empty());
        assert_eq!(rules.checks().count(), 0);
    }
}
