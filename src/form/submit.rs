//! Submission flag handling.

use crate::core::{FormState, FormValues};
use chrono::Utc;
use tokio::sync::watch;

/// Holds the submitting flag up for as long as it lives.
///
/// Dropping the guard clears the flag, so the flag comes down whether the
/// submit callback returns, fails, panics, or its future is dropped.
pub(crate) struct SubmittingGuard<'a> {
    state: &'a watch::Sender<FormState>,
}

impl<'a> SubmittingGuard<'a> {
    /// Raise the flag and take the values to submit in the same update.
    pub(crate) fn begin(state: &'a watch::Sender<FormState>) -> (Self, FormValues) {
        let mut values = FormValues::new();
        state.send_modify(|form| {
            form.begin_submit(Utc::now());
            values = form.values();
        });
        (Self { state }, values)
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(FormState::finish_submit);
    }
}
