//! Common types used across the upload controller.
//!
//! # Categories
//!
//! - **Phase Types** - Where the current upload request stands
//! - **Request Types** - What gets handed to the transport
//! - **Error Types** - Frontend error handling

use thiserror::Error;
use wasm_bindgen::JsValue;

// =============================================================================
// Phase Types
// =============================================================================

/// Why an upload attempt ended in failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The server answered with a status outside the accepted set.
    Rejected { status: u16 },
    /// The request never completed (offline, CORS, aborted connection).
    Network,
}

/// Lifecycle of the current upload request.
///
/// The UI (progress value, status text, submit button) is a pure
/// function of this value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    /// Nothing submitted yet since page load.
    #[default]
    Idle,
    /// Request dispatched; `percent` is the last reported progress.
    Uploading { percent: u8 },
    /// Accepted by the server, page reload requested.
    Succeeded,
    /// Terminal failure, submit control re-enabled.
    Failed(FailureKind),
}

impl UploadPhase {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, UploadPhase::Uploading { .. })
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadPhase::Succeeded | UploadPhase::Failed(_))
    }
}

// =============================================================================
// Request Types
// =============================================================================

/// One POST to dispatch. The file is borrowed from the input element.
#[derive(Debug)]
pub struct UploadRequest<'a, F> {
    /// Target URL, taken from the form's `action`.
    pub url: &'a str,
    /// Multipart part name.
    pub field_name: &'a str,
    pub file: &'a F,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Submitted without a file.
    #[error("No file selected")]
    NoFileSelected,

    /// A request is still in flight.
    #[error("An upload is already in progress")]
    AlreadyInFlight,

    /// The page lacks an element of the DOM contract.
    #[error("Missing element #{0}")]
    MissingElement(String),

    /// An element of the DOM contract has the wrong tag.
    #[error("Element #{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },

    /// A browser API call threw.
    #[error("Browser API error: {0}")]
    Js(String),

    /// Malformed `data-upload-config`.
    #[error("Invalid upload config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Js(format!("{:?}", value))
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
