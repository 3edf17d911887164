//! Browser binding for the analyser form submission guard.
//!
//! Build with `wasm-pack build crates/guard-wasm --target web` and load the
//! generated package from the analyser page:
//!
//! ```js
//! import init, { attachDefaultSubmissionGuard } from "/static/pkg/analyser_guard.js";
//! await init();
//! attachDefaultSubmissionGuard();
//! ```

pub mod dom;
pub mod logging;

use wasm_bindgen::prelude::*;

use domain::{DomainError, GuardBinding};

pub use dom::{attach_with, DomSubmitEvent, InputField, WindowAlerter};
pub use logging::init_logging;

/// Attach the guard to `#formId`, reading the password from `#fieldId`.
///
/// Throws when either element is missing from the page; nothing is attached
/// in that case.
#[wasm_bindgen(js_name = attachSubmissionGuard)]
pub fn attach_submission_guard(form_id: &str, field_id: &str) -> Result<(), JsValue> {
    let binding = GuardBinding::new(form_id, field_id).map_err(to_js_error)?;
    dom::attach(&binding)
}

/// Attach the guard to the analyser page's default form and field.
#[wasm_bindgen(js_name = attachDefaultSubmissionGuard)]
pub fn attach_default_submission_guard() -> Result<(), JsValue> {
    dom::attach(&GuardBinding::default())
}

pub(crate) fn to_js_error(err: DomainError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
