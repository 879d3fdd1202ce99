//! Upload controller.
//!
//! Owns the UI state of one upload form and walks it through the request
//! lifecycle:
//!
//! ```text
//!   Idle ──submit──▶ Uploading{0} ──progress──▶ Uploading{n}
//!                         │
//!                         ├── load, accepted status ──▶ Succeeded (reload)
//!                         ├── load, other status ─────▶ Failed(Rejected)
//!                         └── error ──────────────────▶ Failed(Network)
//! ```
//!
//! A failed form can be submitted again. Nothing times out: a request that
//! never completes keeps the form in `Uploading`.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::{
    COMPLETE_MESSAGE, FAILED_MESSAGE, NETWORK_ERROR_MESSAGE, NO_FILE_MESSAGE, STARTING_MESSAGE,
};
use crate::services::{Transport, UploadEvents};
use crate::{AppError, AppResult, FailureKind, UploadConfig, UploadPhase, UploadRequest};

/// The UI surface the controller writes to.
pub trait UploadView {
    /// Reveal the progress indicator.
    fn show_progress(&self);
    /// Set the progress bar, `percent` is within 0..=100.
    fn set_progress(&self, percent: u8);
    fn set_status(&self, text: &str);
    fn set_submit_enabled(&self, enabled: bool);
    /// Blocking user notification.
    fn alert(&self, message: &str);
    /// Reload the hosting page.
    fn reload(&self);
}

/// Percentage of `loaded` over `total`, rounded half up.
///
/// Returns `None` when the total is unknown, zero or not finite.
pub fn percent_complete(loaded: f64, total: Option<f64>) -> Option<u8> {
    let total = total.filter(|t| t.is_finite() && *t > 0.0)?;
    if !loaded.is_finite() {
        return None;
    }
    let percent = (loaded / total * 100.0).round().clamp(0.0, 100.0);
    Some(percent as u8)
}

/// Drives one upload form.
pub struct UploadController<V, T> {
    view: V,
    transport: T,
    config: UploadConfig,
    phase: Cell<UploadPhase>,
}

impl<V, T> UploadController<V, T>
where
    V: UploadView + 'static,
    T: Transport + 'static,
{
    pub fn new(view: V, transport: T, config: UploadConfig) -> Self {
        Self {
            view,
            transport,
            config,
            phase: Cell::new(UploadPhase::Idle),
        }
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Handle a form submission targeting `action`.
    ///
    /// The UI is switched to the uploading state before the request is
    /// handed to the transport.
    pub fn submit(self: &Rc<Self>, action: &str, file: Option<T::File>) -> AppResult<()> {
        let Some(file) = file else {
            self.view.alert(NO_FILE_MESSAGE);
            return Err(AppError::NoFileSelected);
        };
        if self.phase().is_in_flight() {
            log::warn!("Submission ignored, an upload is already running");
            return Err(AppError::AlreadyInFlight);
        }

        self.view.show_progress();
        self.view.set_submit_enabled(false);
        self.view.set_progress(0);
        self.view.set_status(STARTING_MESSAGE);
        self.phase.set(UploadPhase::Uploading { percent: 0 });

        let request = UploadRequest {
            url: action,
            field_name: &self.config.field_name,
            file: &file,
        };
        let events: Rc<dyn UploadEvents> = self.clone();
        if let Err(e) = self.transport.send(request, events) {
            log::error!("❌ Could not dispatch upload: {}", e);
            self.on_error();
            return Err(e);
        }
        Ok(())
    }

    fn fail(&self, kind: FailureKind, message: &str) {
        self.phase.set(UploadPhase::Failed(kind));
        self.view.set_status(message);
        self.view.set_submit_enabled(true);
    }
}

impl<V, T> UploadEvents for UploadController<V, T>
where
    V: UploadView + 'static,
    T: Transport + 'static,
{
    fn on_progress(&self, loaded: f64, total: Option<f64>) {
        let UploadPhase::Uploading { percent: current } = self.phase() else {
            return;
        };
        let Some(reported) = percent_complete(loaded, total) else {
            return;
        };
        // Never move the bar backwards within one request.
        let percent = reported.max(current);

        self.phase.set(UploadPhase::Uploading { percent });
        self.view.set_progress(percent);
        self.view.set_status(&format!("{}%", percent));
        log::debug!("Upload progress {}%", percent);
    }

    fn on_load(&self, status: u16) {
        if !self.phase().is_in_flight() {
            return;
        }
        if self.config.is_accepted(status) {
            log::info!("✅ Upload accepted ({}), reloading", status);
            self.phase.set(UploadPhase::Succeeded);
            self.view.set_status(COMPLETE_MESSAGE);
            self.view.reload();
        } else {
            log::warn!("Upload rejected with status {}", status);
            self.fail(FailureKind::Rejected { status }, FAILED_MESSAGE);
        }
    }

    fn on_error(&self) {
        if !self.phase().is_in_flight() {
            return;
        }
        log::error!("❌ Upload failed at the transport level");
        self.fail(FailureKind::Network, NETWORK_ERROR_MESSAGE);
    }
}
