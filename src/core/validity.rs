//! Aggregate form validity.

/// A form is valid when no field has an error and no value is blank.
///
/// Blank means empty after trimming whitespace. A form with no fields is
/// valid.
///
/// # Example
///
/// ```rust
/// use formset::core::is_form_valid;
///
/// assert!(is_form_valid(["ada", "a@b.c"], ["", ""]));
/// assert!(!is_form_valid(["ada", "  "], ["", ""]));
/// assert!(!is_form_valid(["ada"], ["Too short"]));
/// ```
pub fn is_form_valid<'a, V, E>(values: V, errors: E) -> bool
where
    V: IntoIterator<Item = &'a str>,
    E: IntoIterator<Item = &'a str>,
{
    errors.into_iter().all(str::is_empty)
        && values.into_iter().all(|value| !value.trim().is_empty())
}
