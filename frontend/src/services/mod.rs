//! Browser-facing services.
//!
//! # Services
//!
//! - [`upload`] - Multipart POST with progress over `XMLHttpRequest`
//! - [`page`] - Binding to the server-rendered dashboard form

pub mod upload;
pub mod page;

pub use upload::*;
pub use page::*;
