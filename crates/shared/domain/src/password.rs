//! Candidate password value object.
//!
//! Wraps the raw text read from the form at submit time. The value is never
//! exposed through `Debug` and is dropped as soon as the check completes.

use crate::constants::MAX_PASSWORD_LENGTH;
use crate::error::{DomainError, DomainResult};

/// Password text as typed into the analyser form.
///
/// Length is measured in UTF-16 code units, the unit the browser uses for
/// `value.length` and `maxlength`.
#[derive(Clone, PartialEq, Eq)]
pub struct CandidatePassword {
    value: String,
}

// Don't expose the value in debug output (security)
impl std::fmt::Debug for CandidatePassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidatePassword")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl CandidatePassword {
    /// Wrap the current field value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Length in UTF-16 code units.
    pub fn len(&self) -> usize {
        self.value.encode_utf16().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Check the value against [`MAX_PASSWORD_LENGTH`].
    ///
    /// # Errors
    /// Returns [`DomainError::InputTooLong`] when the value is longer than the limit.
    pub fn check_length(&self) -> DomainResult<()> {
        check_length(self)
    }
}

impl From<String> for CandidatePassword {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for CandidatePassword {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Enforce the maximum password length.
///
/// Exactly [`MAX_PASSWORD_LENGTH`] units is accepted; one more is rejected.
pub fn check_length(candidate: &CandidatePassword) -> DomainResult<()> {
    let length = candidate.len();
    if length > MAX_PASSWORD_LENGTH {
        return Err(DomainError::input_too_long(length, MAX_PASSWORD_LENGTH));
    }
    Ok(())
}
