//! DocDash - Upload controller for the document dashboard
//!
//! A WebAssembly module that takes over the dashboard's upload form: it
//! posts the selected file in the background and mirrors the transfer in a
//! progress bar instead of letting the browser navigate away.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐     ┌─────────────────────────────┐
//! │  DomView (server template)   │     │  SignalView (UploadForm)    │
//! └──────────────┬───────────────┘     └──────────────┬──────────────┘
//!                └────────── UploadView ──────────────┘
//!                                │
//!                      ┌─────────▼─────────┐
//!                      │  UploadController │
//!                      └─────────┬─────────┘
//!                        Transport │ ▲ UploadEvents
//!                      ┌─────────▼─┴───────┐
//!                      │   XhrTransport    │──▶ POST multipart/form-data
//!                      └───────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Element ids, messages, per-form `UploadConfig`
//! - [`types`] - Upload phases, requests and errors
//! - [`controller`] - The upload state machine
//! - [`components`] - Leptos rendering of the upload form
//! - [`services`] - XHR transport and server-rendered page binding

use gloo_utils::document;
use leptos::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod controller;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::UploadConfig;

// Types
pub use types::{
    // Phases
    FailureKind, UploadPhase,
    // Requests
    UploadRequest,
    // Errors
    AppError, AppResult,
};

// Controller
pub use controller::{percent_complete, UploadController, UploadView};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point. Binds to the dashboard's upload form when the page
/// has one.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    if document().get_element_by_id(config::FORM_ID).is_none() {
        log::debug!("No #{} on this page, nothing to bind", config::FORM_ID);
        return;
    }

    match bind_upload_form() {
        Ok(_) => log::info!("📄 DocDash upload controller ready"),
        Err(e) => log::error!("Could not bind upload form: {}", e),
    }
}

/// Standalone page hosting the upload form, for development with trunk.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="container">
            <h1>"Upload a document"</h1>
            <UploadForm action="/upload"/>
        </main>
    }
}
