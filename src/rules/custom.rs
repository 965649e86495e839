//! Custom per-field validators.
//!
//! A custom validator is the one rule a caller writes as code rather than
//! declares as data. It is registered under the `validate` identifier and
//! always runs before the built-in rules.

use std::fmt;
use std::sync::Arc;

/// Caller-supplied check that returns an error message, or `None` to pass.
///
/// An empty message counts as a pass, so a validator may return
/// `Some(String::new())` without marking the field invalid.
///
/// # Example
///
/// ```rust
/// use formset::rules::CustomValidator;
///
/// let no_admin = CustomValidator::new(|value: &str| {
///     (value == "admin").then(|| "Reserved name".to_string())
/// });
///
/// assert_eq!(no_admin.check("admin"), Some("Reserved name".to_string()));
/// assert_eq!(no_admin.check("alice"), None);
/// ```
#[derive(Clone)]
pub struct CustomValidator {
    check: Arc<dyn Fn(&str) -> Option<String> + Send + Sync>,
}

impl CustomValidator {
    /// Wrap a predicate. It should be deterministic in the value it is given.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        CustomValidator {
            check: Arc::new(check),
        }
    }

    /// Run the validator, normalizing an empty message to a pass.
    pub fn check(&self, value: &str) -> Option<String> {
        (self.check)(value).filter(|message| !message.is_empty())
    }
}

impl fmt::Debug for CustomValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomValidator(..)")
    }
}
