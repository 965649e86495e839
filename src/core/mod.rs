//! Core form state and validation logic.
//!
//! This module is the pure part of the crate:
//! - `Field` and `FieldRegistry` for values and attached rules
//! - `ErrorStore` for the latest message per field
//! - `evaluate` for running one field's rules
//! - `is_form_valid` for aggregate validity
//! - `FormState`, the single store combining all of the above
//!
//! Nothing here does I/O, spawns tasks, or notifies observers.

mod errors;
mod evaluate;
mod field;
mod registry;
mod state;
mod validity;

pub use errors::{ErrorStore, FormErrors};
pub use evaluate::{accumulate, evaluate};
pub use field::{Field, FieldStatus};
pub use registry::{FieldRegistry, FormValues};
pub use state::{FormSnapshot, FormState, SubmissionState};
pub use validity::is_form_valid;
