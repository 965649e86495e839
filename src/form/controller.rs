//! Form controller: the public face of a form.

use crate::config::{FormConfig, UnregisteredChange};
use crate::core::{
    accumulate, evaluate, FieldStatus, FormErrors, FormSnapshot, FormState, FormValues,
};
use crate::error::{FieldViolation, FormError};
use crate::form::binding::{ChangeEvent, ChangeHandler, EventTarget, FieldBinding};
use crate::form::submit::SubmittingGuard;
use crate::rules::RuleSet;
use std::future::Future;
use std::sync::{Arc, Weak};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tokio::sync::watch;
use tracing::{debug, trace, warn};

/// Handle to one form.
///
/// Cloning is cheap and every clone drives the same form. All state sits in
/// a single [`FormState`] inside a watch channel: writes are applied
/// immediately, reads always see the latest write, and subscribers are
/// woken on every change.
///
/// # Example
///
/// ```rust
/// use formset::form::{ChangeEvent, FormController};
/// use formset::rules::RuleSet;
///
/// let form = FormController::new();
/// let email = form.register(
///     "email",
///     Some(RuleSet::builder().required("Required").email_format("Bad email").build()),
/// );
///
/// (email.on_change)(ChangeEvent::new("email", "abc")).unwrap();
/// assert_eq!(form.errors()["email"], "Bad email");
///
/// email.change("").unwrap();
/// assert_eq!(form.errors()["email"], "Required");
///
/// email.change("ada@example.com").unwrap();
/// assert!(form.is_form_valid());
/// ```
#[derive(Clone, Debug)]
pub struct FormController {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    state: watch::Sender<FormState>,
    config: FormConfig,
}

/// Non-owning handle to a form, obtained from [`FormController::downgrade`].
///
/// Rules are stored inside the form, so a custom validator that captures a
/// strong [`FormController`] keeps the form alive forever. Capture one of
/// these instead and upgrade it on each call.
///
/// # Example
///
/// ```rust
/// use formset::{FormController, RuleSet};
///
/// let form = FormController::new();
/// form.register("password", None);
///
/// let weak = form.downgrade();
/// form.register(
///     "confirm",
///     Some(
///         RuleSet::builder()
///             .validate(move |value| {
///                 let form = weak.upgrade()?;
///                 (value != form.get_value("password"))
///                     .then(|| "Passwords differ".to_string())
///             })
///             .build(),
///     ),
/// );
///
/// form.set_value("password", "secret").unwrap();
/// form.set_value("confirm", "other").unwrap();
/// assert_eq!(form.error("confirm"), "Passwords differ");
/// ```
#[derive(Clone, Debug)]
pub struct WeakFormController {
    inner: Weak<Inner>,
}

impl WeakFormController {
    /// The form, if any strong handle is still alive.
    pub fn upgrade(&self) -> Option<FormController> {
        self.inner.upgrade().map(|inner| FormController { inner })
    }
}

impl FormController {
    /// Create an empty form with the default configuration.
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    pub fn with_config(config: FormConfig) -> Self {
        let (state, _) = watch::channel(FormState::new());
        Self {
            inner: Arc::new(Inner { state, config }),
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.inner.config
    }

    /// A handle that does not keep the form alive.
    pub fn downgrade(&self) -> WeakFormController {
        WeakFormController {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Register a field and get the binding for its input.
    ///
    /// The first call for a name creates the field with an empty value and
    /// attaches `rules`. Later calls return the current value and ignore
    /// `rules`.
    pub fn register(&self, name: &str, rules: Option<RuleSet>) -> FieldBinding {
        let mut value = String::new();
        let created = self.inner.state.send_if_modified(|state| {
            let created = state.register(name, rules);
            value = state.value(name).to_string();
            created
        });

        if created {
            debug!(field = name, "registered field");
        } else {
            trace!(field = name, "field already registered; rules unchanged");
        }

        FieldBinding {
            name: name.to_string(),
            value,
            on_change: self.change_handler(),
        }
    }

    /// Apply a change event from an input.
    ///
    /// Stores the new value, re-runs the field's rules and stores the first
    /// failure (or clears the error). A field that was never registered is
    /// handled per [`FormConfig::unregistered_change`].
    pub fn handle_change(&self, event: ChangeEvent) -> Result<(), FormError> {
        let EventTarget { name, value } = event.target;
        self.set_value(&name, value)
    }

    /// Change a field's value from code, exactly as a change event would.
    pub fn set_value(&self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        let rules = {
            let state = self.inner.state.borrow();
            if !state.is_registered(name)
                && self.inner.config.unregistered_change == UnregisteredChange::Reject
            {
                warn!(field = name, "change for unregistered field rejected");
                return Err(FormError::UnregisteredField {
                    name: name.to_string(),
                });
            }
            state.registry().rules(name)
        };

        // Rules run outside the channel lock so a custom validator may read
        // the form through a `WeakFormController`.
        let error = evaluate(&value, &rules, &self.inner.config);
        trace!(
            field = name,
            error = error.as_deref().unwrap_or(""),
            "field validated"
        );

        self.inner
            .state
            .send_modify(|state| state.apply_change(name, value, error));
        Ok(())
    }

    /// Current value of one field; empty when the field is unknown.
    pub fn get_value(&self, name: &str) -> String {
        self.inner.state.borrow().value(name).to_string()
    }

    /// Current value of every field.
    pub fn get_values(&self) -> FormValues {
        self.inner.state.borrow().values()
    }

    /// Submit the form.
    ///
    /// Raises the submitting flag, passes the current values to
    /// `on_submit` and awaits it. The flag is cleared once the callback
    /// settles, whatever the outcome; the callback's result is returned
    /// unchanged. Overlapping submissions are not coordinated: the first to
    /// settle clears the flag.
    pub async fn handle_submit<F, Fut, T, E>(&self, on_submit: F) -> Result<T, E>
    where
        F: FnOnce(FormValues) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let (_guard, values) = SubmittingGuard::begin(&self.inner.state);
        debug!(fields = values.len(), "submitting form");

        let result = on_submit(values).await;
        match &result {
            Ok(_) => debug!("submission completed"),
            Err(_) => debug!("submission failed"),
        }
        result
    }

    /// Blank every value and error. Registrations and rules are kept.
    pub fn reset(&self) {
        self.inner.state.send_modify(FormState::reset);
        debug!("form reset");
    }

    /// Re-run every field's rules against its current value.
    ///
    /// Each field's error is updated, and all failures are returned
    /// together rather than stopping at the first failing field.
    pub fn trigger(&self) -> Validation<(), NonEmptyVec<FieldViolation>> {
        let pending: Vec<(String, String, Arc<RuleSet>)> = self
            .inner
            .state
            .borrow()
            .registry()
            .iter()
            .map(|(name, field)| {
                (
                    name.to_string(),
                    field.value().to_string(),
                    Arc::clone(field.rules()),
                )
            })
            .collect();

        let outcomes: Vec<(String, Option<String>)> = pending
            .into_iter()
            .map(|(name, value, rules)| {
                let error = evaluate(&value, &rules, &self.inner.config);
                (name, error)
            })
            .collect();

        self.inner.state.send_modify(|state| {
            for (name, error) in &outcomes {
                state.apply_error(name, error.clone());
            }
        });

        let result = accumulate(outcomes);
        debug!(valid = result.is_success(), "form validated");
        result
    }

    /// Current error message of every validated field.
    pub fn errors(&self) -> FormErrors {
        self.inner.state.borrow().errors().all().clone()
    }

    /// Current error message of one field; empty when there is none.
    pub fn error(&self, name: &str) -> String {
        self.inner.state.borrow().errors().get(name).to_string()
    }

    /// True when no field has an error and no value is blank.
    pub fn is_form_valid(&self) -> bool {
        self.inner.state.borrow().is_valid()
    }

    pub fn is_submitting(&self) -> bool {
        self.inner.state.borrow().is_submitting()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.inner.state.borrow().snapshot()
    }

    /// Observe the form. The receiver is woken after every change.
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.inner.state.subscribe()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.inner.state.borrow().is_registered(name)
    }

    pub fn field_status(&self, name: &str) -> Option<FieldStatus> {
        self.inner.state.borrow().status(name)
    }

    /// Registered field names in sorted order.
    pub fn field_names(&self) -> Vec<String> {
        self.inner
            .state
            .borrow()
            .registry()
            .names()
            .map(str::to_string)
            .collect()
    }

    fn change_handler(&self) -> ChangeHandler {
        let form = self.clone();
        Arc::new(move |event: ChangeEvent| form.handle_change(event))
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
