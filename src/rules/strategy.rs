//! Dispatch from rule identifiers to predicates.
//!
//! Each strategy pulls whatever parameter it needs out of the rule's
//! declaration and hands it to a predicate. The table is a plain static:
//! there is no way to register strategies at runtime.

use crate::config::{FormConfig, MaxLengthSemantics};
use crate::rules::declaration::{RuleEntry, RuleKind, RuleValue};
use crate::rules::predicates;

/// Outcome of a strategy: `Some(passed)`, or `None` when the declaration
/// lacks a usable parameter.
pub type Strategy = fn(&str, &RuleEntry, &FormConfig) -> Option<bool>;

static STRATEGIES: [(RuleKind, Strategy); 4] = [
    (RuleKind::Required, required),
    (RuleKind::EmailFormat, email_format),
    (RuleKind::MinLength, min_length),
    (RuleKind::MaxLength, max_length),
];

/// Look up the strategy for a built-in rule. `validate` has none.
pub fn strategy_for(kind: RuleKind) -> Option<Strategy> {
    STRATEGIES
        .iter()
        .find(|(candidate, _)| *candidate == kind)
        .map(|(_, strategy)| *strategy)
}

/// Evaluate one built-in rule against a value.
pub fn dispatch(
    kind: RuleKind,
    value: &str,
    entry: &RuleEntry,
    config: &FormConfig,
) -> Option<bool> {
    strategy_for(kind).and_then(|strategy| strategy(value, entry, config))
}

fn length_param(entry: &RuleEntry) -> Option<usize> {
    entry.value().and_then(RuleValue::as_length)
}

fn required(value: &str, _entry: &RuleEntry, _config: &FormConfig) -> Option<bool> {
    Some(predicates::required(value))
}

fn email_format(value: &str, _entry: &RuleEntry, _config: &FormConfig) -> Option<bool> {
    Some(predicates::email_format(value))
}

fn min_length(value: &str, entry: &RuleEntry, _config: &FormConfig) -> Option<bool> {
    length_param(entry).map(|min| predicates::min_length(value, min))
}

fn max_length(value: &str, entry: &RuleEntry, config: &FormConfig) -> Option<bool> {
    let max = length_param(entry)?;
    Some(match config.max_length {
        MaxLengthSemantics::AtMost => predicates::max_length(value, max),
        MaxLengthSemantics::Legacy => predicates::min_length(value, max),
    })
}
