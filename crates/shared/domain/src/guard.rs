//! Form submission guard.
//!
//! Intercepts the analyser form's submit event and blocks passwords longer
//! than [`MAX_PASSWORD_LENGTH`]. The host environment is reached only through
//! the [`PasswordSource`], [`SubmitEvent`] and [`Alerter`] traits, so the same
//! guard runs in the browser binding and in tests.

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::constants::{ANALYSER_FORM_ID, MAX_PASSWORD_LENGTH, PASSWORD_FIELD_ID};
use crate::error::{DomainError, DomainResult};
use crate::password::CandidatePassword;

/// Reads the password field at the moment of submission.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PasswordSource {
    /// Current text of the password field
    fn current_value(&self) -> String;
}

/// The submit event being handled.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait SubmitEvent {
    /// Cancel the host's default submission action
    fn prevent_default(&self);
}

/// Blocking user-facing notification.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Alerter {
    fn alert(&self, message: &str);
}

/// Result of a single submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Default submission proceeds untouched
    Allowed,
    /// Submission cancelled and the user alerted
    Blocked,
}

impl GuardOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, GuardOutcome::Blocked)
    }
}

/// Element ids the guard attaches to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardBinding {
    pub form_id: String,
    pub field_id: String,
}

impl Default for GuardBinding {
    fn default() -> Self {
        Self {
            form_id: ANALYSER_FORM_ID.to_string(),
            field_id: PASSWORD_FIELD_ID.to_string(),
        }
    }
}

impl GuardBinding {
    /// Create a binding for the given form and field ids.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidBinding`] for empty, whitespace-bearing
    /// or identical ids.
    pub fn new(form_id: impl Into<String>, field_id: impl Into<String>) -> DomainResult<Self> {
        let binding = Self {
            form_id: form_id.into(),
            field_id: field_id.into(),
        };
        binding.validate()?;
        Ok(binding)
    }

    /// Check that both ids are usable as HTML element ids.
    pub fn validate(&self) -> DomainResult<()> {
        for (name, id) in [("form id", &self.form_id), ("field id", &self.field_id)] {
            if id.is_empty() {
                return Err(DomainError::invalid_binding(format!("{} is empty", name)));
            }
            if id.chars().any(char::is_whitespace) {
                return Err(DomainError::invalid_binding(format!(
                    "{} '{}' contains whitespace",
                    name, id
                )));
            }
        }
        if self.form_id == self.field_id {
            return Err(DomainError::invalid_binding(
                "form id and field id must differ",
            ));
        }
        Ok(())
    }
}

/// Guard attached to one form.
///
/// Holds no state between attempts: every call to [`SubmissionGuard::on_submit`]
/// reads the field afresh and decides independently.
pub struct SubmissionGuard<S, A> {
    source: S,
    alerter: A,
}

impl<S, A> SubmissionGuard<S, A>
where
    S: PasswordSource,
    A: Alerter,
{
    pub fn new(source: S, alerter: A) -> Self {
        Self { source, alerter }
    }

    /// Handle one submit event.
    ///
    /// Over-length values cancel the event once and alert once; anything else
    /// leaves the event alone.
    pub fn on_submit<E>(&self, event: &E) -> GuardOutcome
    where
        E: SubmitEvent + ?Sized,
    {
        let candidate = CandidatePassword::new(self.source.current_value());

        match candidate.check_length() {
            Ok(()) => {
                tracing::debug!(outcome = ?GuardOutcome::Allowed, "Form submission checked");
                GuardOutcome::Allowed
            }
            Err(err) => {
                event.prevent_default();
                self.alerter.alert(&err.user_message());
                tracing::debug!(
                    outcome = ?GuardOutcome::Blocked,
                    max = MAX_PASSWORD_LENGTH,
                    "Form submission checked"
                );
                GuardOutcome::Blocked
            }
        }
    }
}
