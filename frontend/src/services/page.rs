//! Attach the controller to a server-rendered dashboard page.
//!
//! The page template provides the elements listed in [`crate::config`];
//! they are looked up once and owned by a [`DomView`].

use std::rc::Rc;

use gloo_utils::{document, window};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlProgressElement,
};

use crate::config::{
    CONFIG_ATTRIBUTE, FILE_INPUT_ID, FORM_ID, PROGRESS_BAR_ID, PROGRESS_STATUS_ID,
    PROGRESS_WRAPPER_ID, SUBMIT_BUTTON_ID,
};
use crate::services::XhrTransport;
use crate::{AppError, AppResult, UploadConfig, UploadController, UploadView};

fn element<E: JsCast>(doc: &Document, id: &str, expected: &'static str) -> AppResult<E> {
    doc.get_element_by_id(id)
        .ok_or_else(|| AppError::MissingElement(id.to_string()))?
        .dyn_into::<E>()
        .map_err(|_| AppError::WrongElement {
            id: id.to_string(),
            expected,
        })
}

/// The dashboard's upload widgets.
pub struct DomView {
    pub form: HtmlFormElement,
    pub file_input: HtmlInputElement,
    submit_button: HtmlButtonElement,
    progress_wrapper: HtmlElement,
    progress_bar: HtmlProgressElement,
    status: HtmlElement,
}

impl DomView {
    pub fn from_document(doc: &Document) -> AppResult<Self> {
        Ok(Self {
            form: element(doc, FORM_ID, "HtmlFormElement")?,
            file_input: element(doc, FILE_INPUT_ID, "HtmlInputElement")?,
            submit_button: element(doc, SUBMIT_BUTTON_ID, "HtmlButtonElement")?,
            progress_wrapper: element(doc, PROGRESS_WRAPPER_ID, "HtmlElement")?,
            progress_bar: element(doc, PROGRESS_BAR_ID, "HtmlProgressElement")?,
            status: element(doc, PROGRESS_STATUS_ID, "HtmlElement")?,
        })
    }

    /// The single selected file, if any.
    pub fn selected_file(&self) -> Option<web_sys::File> {
        self.file_input.files()?.get(0)
    }
}

impl UploadView for DomView {
    fn show_progress(&self) {
        if let Err(e) = self.progress_wrapper.style().set_property("display", "block") {
            log::warn!("Could not show progress: {:?}", e);
        }
    }

    fn set_progress(&self, percent: u8) {
        self.progress_bar.set_value(f64::from(percent));
    }

    fn set_status(&self, text: &str) {
        self.status.set_text_content(Some(text));
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_button.set_disabled(!enabled);
    }

    fn alert(&self, message: &str) {
        if let Err(e) = window().alert_with_message(message) {
            log::warn!("alert() failed: {:?}", e);
        }
    }

    fn reload(&self) {
        if let Err(e) = window().location().reload() {
            log::error!("Page reload failed: {:?}", e);
        }
    }
}

type PageController = UploadController<DomView, XhrTransport>;

/// Find the upload form on the current page and handle its submissions.
///
/// The submit listener lives as long as the page.
pub fn bind_upload_form() -> AppResult<Rc<PageController>> {
    let view = DomView::from_document(&document())?;
    let config = UploadConfig::from_attribute(view.form.get_attribute(CONFIG_ATTRIBUTE).as_deref());
    let form = view.form.clone();
    let controller = Rc::new(UploadController::new(view, XhrTransport, config));

    let handler = controller.clone();
    let onsubmit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        let action = handler.view().form.action();
        let file = handler.view().selected_file();
        match handler.submit(&action, file) {
            Ok(()) => {}
            Err(AppError::NoFileSelected) => log::info!("Submit without a file"),
            Err(e) => log::warn!("Upload not started: {}", e),
        }
    }) as Box<dyn FnMut(Event)>);

    form.add_event_listener_with_callback("submit", onsubmit.as_ref().unchecked_ref())?;
    onsubmit.forget();

    log::info!("📎 Upload form bound (accepting {:?})", controller.config().accept_status);
    Ok(controller)
}
