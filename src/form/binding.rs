//! The contract between a form and the host's input elements.

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Callback that feeds a change event back into the form.
pub type ChangeHandler = Arc<dyn Fn(ChangeEvent) -> Result<(), FormError> + Send + Sync>;

/// The element a change event originated from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTarget {
    pub name: String,
    pub value: String,
}

/// A change event in the `{target: {name, value}}` shape hosts emit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub target: EventTarget,
}

impl ChangeEvent {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            target: EventTarget {
                name: name.into(),
                value: value.into(),
            },
        }
    }
}

/// Properties to spread onto an input element: its name, the value to
/// display, and the handler for its change events.
#[derive(Clone)]
pub struct FieldBinding {
    pub name: String,
    pub value: String,
    pub on_change: ChangeHandler,
}

impl FieldBinding {
    /// Send a change for this binding's field.
    pub fn change(&self, value: impl Into<String>) -> Result<(), FormError> {
        (self.on_change)(ChangeEvent::new(self.name.clone(), value))
    }
}

impl fmt::Debug for FieldBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
