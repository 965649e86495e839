//! Running a field's rules against a value.
//!
//! Both functions are pure: they read rules and values and return
//! outcomes. Storing the outcome is the caller's job.

use crate::config::FormConfig;
use crate::error::FieldViolation;
use crate::rules::{dispatch, RuleSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// First failing message for `value`, or `None` when every rule passes.
///
/// The custom validator runs first, then the built-in rules in
/// [`RuleKind::PRIORITY`](crate::rules::RuleKind::PRIORITY) order.
/// Evaluation stops at the first failure. A length rule declared without a
/// usable parameter fails. A rule whose message is empty counts as passing,
/// the same as a custom validator returning an empty message.
///
/// # Example
///
/// ```rust
/// use formset::config::FormConfig;
/// use formset::core::evaluate;
/// use formset::rules::RuleSet;
///
/// let rules = RuleSet::builder()
///     .email_format("Bad email")
///     .required("Required")
///     .build();
/// let config = FormConfig::default();
///
/// assert_eq!(evaluate("abc", &rules, &config), Some("Bad email".to_string()));
/// assert_eq!(evaluate("", &rules, &config), Some("Required".to_string()));
/// assert_eq!(evaluate("a@b.c", &rules, &config), None);
/// ```
pub fn evaluate(value: &str, rules: &RuleSet, config: &FormConfig) -> Option<String> {
    if let Some(message) = rules.custom().and_then(|validator| validator.check(value)) {
        return Some(message);
    }

    for (kind, entry) in rules.checks() {
        let passed = match dispatch(kind, value, entry, config) {
            Some(passed) => passed,
            None => {
                tracing::warn!(rule = %kind, "rule has no usable parameter; treating as failed");
                false
            }
        };
        if !passed && !entry.message().is_empty() {
            return Some(entry.message().to_string());
        }
    }

    None
}

/// Fold per-field outcomes into one result, keeping every failure.
pub fn accumulate<I>(outcomes: I) -> Validation<(), NonEmptyVec<FieldViolation>>
where
    I: IntoIterator<Item = (String, Option<String>)>,
{
    let checks: Vec<Validation<(), NonEmptyVec<FieldViolation>>> = outcomes
        .into_iter()
        .map(|(field, outcome)| match outcome {
            Some(message) => Validation::fail(FieldViolation { field, message }),
            None => Validation::success(()),
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}
