//! UI Components for the upload form.
//!
//! - [`UploadForm`] - Form, file input and submit button bound to an `UploadController`
//! - [`ProgressSection`] - Progress bar and status line

mod upload;
mod progress;

pub use upload::*;
pub use progress::*;
