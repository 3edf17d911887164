//! Browser tests for the DOM binding.
//!
//! Run with `wasm-pack test --headless --firefox crates/guard-wasm`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlFormElement, HtmlInputElement};

use analyser_guard::{attach_default_submission_guard, attach_submission_guard, attach_with};
use domain::{Alerter, GuardBinding, PASSWORD_TOO_LONG_MESSAGE};

wasm_bindgen_test_configure!(run_in_browser);

/// Records alerts instead of opening a blocking dialog
#[derive(Clone, Default)]
struct RecordingAlerter {
    messages: Rc<RefCell<Vec<String>>>,
}

impl Alerter for RecordingAlerter {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn mount_html(html: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(html);
}

fn mount(form_id: &str, field_id: &str) -> (HtmlFormElement, HtmlInputElement) {
    mount_html(&format!(
        r#"<form id="{form_id}"><input type="password" id="{field_id}"></form>"#
    ));
    let document = web_sys::window().unwrap().document().unwrap();

    let form = document
        .get_element_by_id(form_id)
        .unwrap()
        .dyn_into::<HtmlFormElement>()
        .unwrap();
    let field = document
        .get_element_by_id(field_id)
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    (form, field)
}

/// Dispatch a cancelable submit event; returns true when it was cancelled.
fn submit(form: &HtmlFormElement) -> bool {
    let init = EventInit::new();
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    form.dispatch_event(&event).unwrap();
    event.default_prevented()
}

#[wasm_bindgen_test]
fn test_over_length_submission_blocked() {
    let (form, field) = mount("formA", "fieldA");
    let alerter = RecordingAlerter::default();
    attach_with(&GuardBinding::new("formA", "fieldA").unwrap(), alerter.clone()).unwrap();

    field.set_value(&"a".repeat(65));
    assert!(submit(&form));
    assert_eq!(*alerter.messages.borrow(), vec![PASSWORD_TOO_LONG_MESSAGE.to_string()]);
}

#[wasm_bindgen_test]
fn test_boundary_submission_allowed() {
    let (form, field) = mount("formB", "fieldB");
    let alerter = RecordingAlerter::default();
    attach_with(&GuardBinding::new("formB", "fieldB").unwrap(), alerter.clone()).unwrap();

    field.set_value(&"a".repeat(64));
    assert!(!submit(&form));

    field.set_value("");
    assert!(!submit(&form));
    assert!(alerter.messages.borrow().is_empty());
}

#[wasm_bindgen_test]
fn test_each_attempt_alerts_once() {
    let (form, field) = mount("formC", "fieldC");
    let alerter = RecordingAlerter::default();
    attach_with(&GuardBinding::new("formC", "fieldC").unwrap(), alerter.clone()).unwrap();

    field.set_value(&"a".repeat(80));
    assert!(submit(&form));
    assert!(submit(&form));
    assert_eq!(alerter.messages.borrow().len(), 2);
}

fn error_text(result: Result<(), wasm_bindgen::JsValue>) -> String {
    result
        .expect_err("attach should fail")
        .as_string()
        .expect("error should be a string")
}

#[wasm_bindgen_test]
fn test_missing_field_fails_fast() {
    let (form, field) = mount("formD", "fieldD");

    let result = attach_submission_guard("formD", "noSuchField");
    assert_eq!(error_text(result), "Missing element: #noSuchField");

    // Nothing was attached, so an over-length value goes through
    field.set_value(&"a".repeat(80));
    assert!(!submit(&form));
}

#[wasm_bindgen_test]
fn test_missing_form_fails_fast() {
    let (form, field) = mount("formE", "fieldE");

    let result = attach_submission_guard("noSuchForm", "fieldE");
    assert_eq!(error_text(result), "Missing element: #noSuchForm");

    field.set_value(&"a".repeat(80));
    assert!(!submit(&form));
}

#[wasm_bindgen_test]
fn test_wrong_element_type_rejected() {
    mount_html(r#"<div id="formF"><input type="password" id="fieldF"></div>"#);

    let result = attach_submission_guard("formF", "fieldF");
    assert_eq!(
        error_text(result),
        "Invalid binding: #formF has the wrong element type"
    );
}

#[wasm_bindgen_test]
fn test_invalid_binding_rejected() {
    mount("formG", "fieldG");

    assert_eq!(
        error_text(attach_submission_guard("", "fieldG")),
        "Invalid binding: form id is empty"
    );
    assert_eq!(
        error_text(attach_submission_guard("formG", "formG")),
        "Invalid binding: form id and field id must differ"
    );
}

#[wasm_bindgen_test]
fn test_default_binding_attaches_to_analyser_form() {
    let (form, field) = mount("strengthAnalyser", "passwordTextbox");

    attach_default_submission_guard().unwrap();

    // Within the limit, so no alert dialog is opened
    field.set_value(&"a".repeat(64));
    assert!(!submit(&form));
}

#[wasm_bindgen_test]
fn test_default_binding_requires_analyser_form() {
    mount("otherForm", "otherField");

    assert_eq!(
        error_text(attach_default_submission_guard()),
        "Missing element: #strengthAnalyser"
    );
}

#[wasm_bindgen_test]
fn test_attach_installs_console_logger() {
    let (_form, _field) = mount("formH", "fieldH");
    attach_with(
        &GuardBinding::new("formH", "fieldH").unwrap(),
        RecordingAlerter::default(),
    )
    .unwrap();

    assert!(tracing::dispatcher::has_been_set());
}
