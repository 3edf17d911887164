//! Domain-level errors.
//!
//! These errors represent guard rule violations and host precondition failures.
//! They are independent of infrastructure concerns (HTTP, DOM bindings).

use thiserror::Error;

use crate::constants::PASSWORD_TOO_LONG_MESSAGE;

/// Domain-specific errors for guard rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Candidate password is longer than the allowed maximum
    #[error("Input too long: {length} exceeds {max}")]
    InputTooLong { length: usize, max: usize },

    /// Expected element is absent from the host page
    #[error("Missing element: #{0}")]
    MissingElement(String),

    /// Element ids given to the guard are unusable
    #[error("Invalid binding: {0}")]
    InvalidBinding(String),
}

impl DomainError {
    /// Create an input-too-long error
    pub fn input_too_long(length: usize, max: usize) -> Self {
        DomainError::InputTooLong { length, max }
    }

    /// Create a missing element error
    pub fn missing_element(id: impl Into<String>) -> Self {
        DomainError::MissingElement(id.into())
    }

    /// Create an invalid binding error
    pub fn invalid_binding(msg: impl Into<String>) -> Self {
        DomainError::InvalidBinding(msg.into())
    }

    /// Message suitable for showing to the person filling in the form.
    pub fn user_message(&self) -> String {
        match self {
            DomainError::InputTooLong { .. } => PASSWORD_TOO_LONG_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
