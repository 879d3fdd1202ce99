//! Upload form rendered by Leptos.
//!
//! Renders the same element ids as the server template and drives them
//! through signals, so the controller behaves identically in both hosting
//! modes.

use std::rc::Rc;

use gloo_utils::window;
use leptos::*;

use crate::config::{FILE_INPUT_ID, FORM_ID, SUBMIT_BUTTON_ID};
use crate::services::XhrTransport;
use crate::{AppError, ProgressSection, UploadConfig, UploadController, UploadView};

/// Reactive UI state of an [`UploadForm`].
#[derive(Clone, Copy)]
pub struct SignalView {
    pub progress_visible: RwSignal<bool>,
    pub progress: RwSignal<u8>,
    pub status: RwSignal<String>,
    pub submit_enabled: RwSignal<bool>,
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            progress_visible: create_rw_signal(false),
            progress: create_rw_signal(0),
            status: create_rw_signal(String::new()),
            submit_enabled: create_rw_signal(true),
        }
    }
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadView for SignalView {
    fn show_progress(&self) {
        self.progress_visible.set(true);
    }

    fn set_progress(&self, percent: u8) {
        self.progress.set(percent);
    }

    fn set_status(&self, text: &str) {
        self.status.set(text.to_string());
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_enabled.set(enabled);
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

#[component]
pub fn UploadForm(
    /// Endpoint receiving the multipart POST.
    #[prop(into)]
    action: String,
    /// Overrides for accepted statuses and the part name.
    #[prop(optional)]
    config: Option<UploadConfig>,
) -> impl IntoView {
    let ui = SignalView::new();
    let config = config.unwrap_or_default();
    let field_name = config.field_name.clone();
    let controller = Rc::new(UploadController::new(ui, XhrTransport, config));
    let file_input = create_node_ref::<html::Input>();

    let target = action.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let file = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        match controller.submit(&target, file) {
            Ok(()) => {}
            Err(AppError::NoFileSelected) => log::info!("Submit without a file"),
            Err(e) => log::warn!("Upload not started: {}", e),
        }
    };

    view! {
        <form
            class="upload-form"
            id=FORM_ID
            action=action
            method="post"
            enctype="multipart/form-data"
            on:submit=on_submit
        >
            <input type="file" id=FILE_INPUT_ID name=field_name node_ref=file_input/>
            <button
                type="submit"
                class="upload-button"
                id=SUBMIT_BUTTON_ID
                prop:disabled=move || !ui.submit_enabled.get()
            >
                "Upload"
            </button>
            <ProgressSection
                visible=ui.progress_visible
                progress=ui.progress
                status=ui.status
            />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_view_tracks_controller_writes() {
        let runtime = create_runtime();
        let ui = SignalView::new();
        assert!(!ui.progress_visible.get_untracked());
        assert!(ui.submit_enabled.get_untracked());

        ui.show_progress();
        ui.set_submit_enabled(false);
        ui.set_progress(42);
        ui.set_status("42%");

        assert!(ui.progress_visible.get_untracked());
        assert!(!ui.submit_enabled.get_untracked());
        assert_eq!(ui.progress.get_untracked(), 42);
        assert_eq!(ui.status.get_untracked(), "42%");
        runtime.dispose();
    }
}
