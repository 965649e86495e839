//! Formset: form state with rule-based validation
//!
//! Formset tracks the fields of one form, validates each change against the
//! field's declared rules, and runs a submission lifecycle. Rendering and
//! event dispatch belong to the host UI; formset supplies the bindings and
//! state the host needs.
//!
//! The crate follows a "pure core, imperative shell" split. The core
//! (rule predicates, field registry, error store, evaluation, validity) is
//! plain data and pure functions. The shell (`FormController`) owns a single
//! observable store and applies changes to it.
//!
//! # Core Concepts
//!
//! - **Rules**: `required`, `emailFormat`, `minLength`, `maxLength` and a
//!   custom `validate` check, declared per field via `RuleSet`
//! - **Fields**: registered once by name; the first registration fixes the
//!   rules
//! - **Errors**: one message per field, the first failing rule wins
//! - **Validity**: derived from values and errors, never stored
//!
//! # Example
//!
//! ```rust
//! use formset::{FormController, RuleSet};
//!
//! let form = FormController::new();
//! let email = form.register(
//!     "email",
//!     Some(RuleSet::builder().required("Required").email_format("Bad email").build()),
//! );
//!
//! email.change("abc").unwrap();
//! assert_eq!(form.error("email"), "Bad email");
//!
//! email.change("").unwrap();
//! assert_eq!(form.error("email"), "Required");
//!
//! email.change("ada@example.com").unwrap();
//! assert!(form.is_form_valid());
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod form;
pub mod rules;

// Re-export commonly used types
pub use config::{FormConfig, MaxLengthSemantics, UnregisteredChange};
pub use self::core::{FieldStatus, FormErrors, FormSnapshot, FormState, FormValues};
pub use error::{FieldViolation, FormError};
pub use form::{ChangeEvent, FieldBinding, FormController, WeakFormController};
pub use rules::{RuleKind, RuleSet};
