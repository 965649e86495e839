//! The whole form as one value.
//!
//! `FormState` is the only store: values, errors and submission bookkeeping
//! live here together, and validity is derived from it on every read. The
//! controller keeps it in a watch channel; everything in this module is
//! plain data with synchronous, side-effect-free transitions.

use super::errors::{ErrorStore, FormErrors};
use super::field::FieldStatus;
use super::registry::{FieldRegistry, FormValues};
use super::validity::is_form_valid;
use crate::rules::RuleSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Submission bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionState {
    /// True while a submit callback is outstanding
    pub is_submitting: bool,
    /// Number of submissions started
    pub submit_count: u64,
    /// When the most recent submission started
    pub last_submitted_at: Option<DateTime<Utc>>,
}

/// Serializable view of a form at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub values: FormValues,
    pub errors: FormErrors,
    pub is_valid: bool,
    #[serde(flatten)]
    pub submission: SubmissionState,
}

/// Fields, errors and submission state of one form.
///
/// # Example
///
/// ```rust
/// use formset::core::FormState;
/// use formset::rules::RuleSet;
///
/// let mut state = FormState::new();
/// state.register("name", Some(RuleSet::builder().required("Required").build()));
/// state.apply_change("name", "Ada".to_string(), None);
///
/// assert_eq!(state.value("name"), "Ada");
/// assert!(state.is_valid());
///
/// state.reset();
/// assert_eq!(state.value("name"), "");
/// assert!(!state.is_valid());
/// ```
#[derive(Clone, Debug, Default)]
pub struct FormState {
    registry: FieldRegistry,
    errors: ErrorStore,
    submission: SubmissionState,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn errors(&self) -> &ErrorStore {
        &self.errors
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    pub fn status(&self, name: &str) -> Option<FieldStatus> {
        self.registry.status(name)
    }

    /// Current value; empty for unknown fields.
    pub fn value(&self, name: &str) -> &str {
        self.registry.value(name)
    }

    pub fn values(&self) -> FormValues {
        self.registry.values()
    }

    /// Derived on every call from current values and errors.
    pub fn is_valid(&self) -> bool {
        is_form_valid(
            self.registry.iter().map(|(_, field)| field.value()),
            self.errors.messages(),
        )
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.is_submitting
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            values: self.values(),
            errors: self.errors.all().clone(),
            is_valid: self.is_valid(),
            submission: self.submission.clone(),
        }
    }

    /// Register a field; a no-op when the name is already known. Returns
    /// `true` for a new field.
    pub fn register(&mut self, name: &str, rules: Option<RuleSet>) -> bool {
        self.registry.register(name, rules)
    }

    /// Store a new value and the outcome of validating it.
    ///
    /// An unknown name is registered with no rules, which keeps every error
    /// entry attached to a registered field.
    pub fn apply_change(&mut self, name: &str, value: String, error: Option<String>) {
        self.registry.set_value(name, value);
        self.errors.set(name, error);
    }

    /// Record a validation outcome without changing the value.
    pub fn apply_error(&mut self, name: &str, error: Option<String>) {
        if self.registry.contains(name) {
            self.errors.set(name, error);
        }
    }

    /// Blank every value and every recorded error. Registrations, rules and
    /// submission bookkeeping are kept.
    pub fn reset(&mut self) {
        self.registry.clear_values();
        self.errors.clear_all();
    }

    pub fn begin_submit(&mut self, at: DateTime<Utc>) {
        self.submission.is_submitting = true;
        self.submission.submit_count += 1;
        self.submission.last_submitted_at = Some(at);
    }

    pub fn finish_submit(&mut self) {
        self.submission.is_submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_rules() -> RuleSet {
        RuleSet::builder()
            .required("Required")
            .email_format("Bad email")
            .build()
    }

    #[test]
    fn new_state_is_empty_and_valid() {
        let state = FormState::new();
        assert!(state.registry().is_empty());
        assert!(state.is_valid());
        assert!(!state.is_submitting());
    }

    #[test]
    fn registered_but_unfilled_field_is_invalid() {
        let mut state = FormState::new();
        state.register("email", Some(email_rules()));
        assert!(!state.is_valid());
    }

    #[test]
    fn validity_tracks_values_and_errors() {
        let mut state = FormState::new();
        state.register("email", Some(email_rules()));

        state.apply_change("email", "abc".to_string(), Some("Bad email".to_string()));
        assert!(!state.is_valid());

        state.apply_change("email", "a@b.c".to_string(), None);
        assert!(state.is_valid());
    }

    #[test]
    fn apply_change_registers_unknown_field() {
        let mut state = FormState::new();
        state.apply_change("late", "x".to_string(), None);

        assert!(state.is_registered("late"));
        assert_eq!(state.status("late"), Some(FieldStatus::Changed));
    }

    #[test]
    fn apply_error_ignores_unknown_field() {
        let mut state = FormState::new();
        state.apply_error("ghost", Some("bad".to_string()));
        assert!(state.errors().all().is_empty());
    }

    #[test]
    fn reset_blanks_values_and_errors_but_keeps_fields() {
        let mut state = FormState::new();
        state.register("email", Some(email_rules()));
        state.register("name", None);
        state.apply_change("email", "abc".to_string(), Some("Bad email".to_string()));

        state.reset();

        assert_eq!(state.value("email"), "");
        assert_eq!(state.errors().get("email"), "");
        assert_eq!(state.errors().all().len(), 1);
        assert_eq!(state.status("name"), Some(FieldStatus::Reset));
        assert_eq!(state.values().len(), 2);
        assert!(!state.registry().rules("email").is_empty());
    }

    #[test]
    fn submission_bookkeeping() {
        let mut state = FormState::new();
        let at = Utc::now();

        state.begin_submit(at);
        assert!(state.is_submitting());
        assert_eq!(state.submission().submit_count, 1);
        assert_eq!(state.submission().last_submitted_at, Some(at));

        state.finish_submit();
        assert!(!state.is_submitting());
        assert_eq!(state.submission().submit_count, 1);
    }

    #[test]
    fn snapshot_serializes_flat_submission_fields() {
        let mut state = FormState::new();
        state.register("name", None);
        state.apply_change("name", "Ada".to_string(), None);

        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["values"]["name"], "Ada");
        assert_eq!(json["errors"]["name"], "");
        assert_eq!(json["is_valid"], true);
        assert_eq!(json["is_submitting"], false);
        assert_eq!(json["submit_count"], 0);
    }

    #[test]
    fn snapshot_round_trips() {
        let mut state = FormState::new();
        state.apply_change("a", "1".to_string(), Some("bad".to_string()));
        state.begin_submit(Utc::now());

        let snapshot = state.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FormSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
