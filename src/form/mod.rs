//! The imperative shell around the core: a shared, observable form.
//!
//! - `FormController` registers fields, applies changes, submits and resets
//! - `WeakFormController` lets rules read the form without owning it
//! - `FieldBinding` and `ChangeEvent` are the contract with input elements
//!
//! Submission is async; everything else is synchronous and applies before
//! returning.

mod binding;
mod controller;
mod submit;

pub use binding::{ChangeEvent, ChangeHandler, EventTarget, FieldBinding};
pub use controller::{FormController, WeakFormController};
