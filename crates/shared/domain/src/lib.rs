//! Domain layer - Form submission guard and its value objects.
//!
//! This crate contains pure guard logic with no host dependencies. The
//! browser binding and the analyser site both build on it.

pub mod constants;
pub mod error;
pub mod guard;
pub mod password;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use guard::{Alerter, GuardBinding, GuardOutcome, PasswordSource, SubmissionGuard, SubmitEvent};
pub use password::{check_length, CandidatePassword};

#[cfg(any(test, feature = "test-utils"))]
pub use guard::{MockAlerter, MockPasswordSource, MockSubmitEvent};
