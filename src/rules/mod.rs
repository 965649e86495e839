//! Validation rules.
//!
//! - `predicates`: pure string checks behind the built-in rules
//! - `strategy`: static table from rule identifier to predicate
//! - `declaration`: rule identifiers, parameters and per-field rule sets
//! - `custom`: the caller-supplied `validate` rule
//!
//! # Example
//!
//! ```rust
//! use formset::rules::RuleSet;
//!
//! let rules = RuleSet::builder()
//!     .required("Required")
//!     .email_format("Bad email")
//!     .validate(|value| value.ends_with(".test").then(|| "No test domains".to_string()))
//!     .build();
//! assert!(!rules.is_empty());
//! ```

pub mod builder;
pub mod custom;
pub mod declaration;
pub mod predicates;
pub mod strategy;

pub use builder::RuleSetBuilder;
pub use custom::CustomValidator;
pub use declaration::{RuleEntry, RuleInformation, RuleKind, RuleSet, RuleValue};
pub use strategy::{dispatch, strategy_for, Strategy};
