//! DOM adapters for the guard's host traits.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement, Window};

use domain::{
    Alerter, DomainError, DomainResult, GuardBinding, PasswordSource, SubmissionGuard,
    SubmitEvent, SUBMIT_EVENT,
};

use crate::logging::init_logging;
use crate::to_js_error;

/// Password textbox; read on every submission.
pub struct InputField(HtmlInputElement);

impl InputField {
    pub fn new(element: HtmlInputElement) -> Self {
        Self(element)
    }
}

impl PasswordSource for InputField {
    fn current_value(&self) -> String {
        self.0.value()
    }
}

/// Blocking `window.alert`.
pub struct WindowAlerter(Window);

impl WindowAlerter {
    pub fn new(window: Window) -> Self {
        Self(window)
    }
}

impl Alerter for WindowAlerter {
    fn alert(&self, message: &str) {
        if let Err(err) = self.0.alert_with_message(message) {
            tracing::warn!(error = ?err, "window.alert failed");
        }
    }
}

/// Borrowed DOM submit event.
pub struct DomSubmitEvent<'a>(&'a Event);

impl<'a> DomSubmitEvent<'a> {
    pub fn new(event: &'a Event) -> Self {
        Self(event)
    }
}

impl SubmitEvent for DomSubmitEvent<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

fn window() -> DomainResult<Window> {
    web_sys::window().ok_or_else(|| DomainError::missing_element("window"))
}

fn document(window: &Window) -> DomainResult<Document> {
    window
        .document()
        .ok_or_else(|| DomainError::missing_element("document"))
}

fn lookup<T: JsCast>(document: &Document, id: &str) -> DomainResult<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomainError::missing_element(id))?
        .dyn_into::<T>()
        .map_err(|_| DomainError::invalid_binding(format!("#{} has the wrong element type", id)))
}

/// Resolve the form and field, failing fast when either is absent.
fn resolve(
    document: &Document,
    binding: &GuardBinding,
) -> DomainResult<(HtmlFormElement, HtmlInputElement)> {
    let form = lookup::<HtmlFormElement>(document, &binding.form_id)?;
    let field = lookup::<HtmlInputElement>(document, &binding.field_id)?;
    Ok((form, field))
}

/// Attach using `window.alert` for notifications.
pub(crate) fn attach(binding: &GuardBinding) -> Result<(), JsValue> {
    let window = window().map_err(to_js_error)?;
    attach_with(binding, WindowAlerter::new(window))
}

/// Attach the guard with a caller-supplied alerter.
///
/// Installs the console logger on first use. The listener stays registered
/// for the lifetime of the page.
pub fn attach_with<A>(binding: &GuardBinding, alerter: A) -> Result<(), JsValue>
where
    A: Alerter + 'static,
{
    init_logging();
    binding.validate().map_err(to_js_error)?;

    let window = window().map_err(to_js_error)?;
    let document = document(&window).map_err(to_js_error)?;
    let (form, field) = resolve(&document, binding).map_err(to_js_error)?;

    let guard = SubmissionGuard::new(InputField::new(field), alerter);
    let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        guard.on_submit(&DomSubmitEvent::new(&event));
    });

    form.add_event_listener_with_callback(SUBMIT_EVENT, listener.as_ref().unchecked_ref())?;
    listener.forget();

    tracing::debug!(
        form_id = %binding.form_id,
        field_id = %binding.field_id,
        "Submission guard attached"
    );
    Ok(())
}
