//! Domain-level constants.
//!
//! These constants define the guard's limits and the host page contract.

// =============================================================================
// Validation
// =============================================================================

/// Maximum password length accepted by the analyser form, in UTF-16 code units
pub const MAX_PASSWORD_LENGTH: usize = 64;

/// Message shown to the user when a submission is blocked
pub const PASSWORD_TOO_LONG_MESSAGE: &str = "400: Inputted password is too long.";

// =============================================================================
// Host page contract
// =============================================================================

/// Element id of the analyser form
pub const ANALYSER_FORM_ID: &str = "strengthAnalyser";

/// Element id of the password textbox inside the analyser form
pub const PASSWORD_FIELD_ID: &str = "passwordTextbox";

/// DOM event the guard listens for
pub const SUBMIT_EVENT: &str = "submit";
