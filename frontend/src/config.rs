//! Upload configuration.
//!
//! Element identifiers and user-facing messages are fixed by the dashboard
//! template. The accepted status codes and the multipart field name can be
//! overridden per form through a `data-upload-config` JSON attribute.

use serde::Deserialize;

use crate::AppResult;

// =============================================================================
// DOM contract
// =============================================================================

/// The `<form>` whose submission starts an upload.
pub const FORM_ID: &str = "upload-form";

/// The `<input type="file">` holding the selected file.
pub const FILE_INPUT_ID: &str = "file-input";

/// The submit `<button>`, disabled while a request is in flight.
pub const SUBMIT_BUTTON_ID: &str = "upload-btn";

/// Container hidden until the first upload starts.
pub const PROGRESS_WRAPPER_ID: &str = "progress-wrapper";

/// The `<progress>` element, `max` is 100.
pub const PROGRESS_BAR_ID: &str = "progress-bar";

/// Text element showing the current status.
pub const PROGRESS_STATUS_ID: &str = "progress-status";

/// Form attribute carrying per-form overrides.
pub const CONFIG_ATTRIBUTE: &str = "data-upload-config";

// =============================================================================
// Messages
// =============================================================================

pub const NO_FILE_MESSAGE: &str = "Please select a file to upload.";
pub const STARTING_MESSAGE: &str = "Uploading... 0%";
pub const COMPLETE_MESSAGE: &str = "Upload complete! Refreshing...";
pub const FAILED_MESSAGE: &str = "Upload failed. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str = "An error occurred during the upload.";

// =============================================================================
// Per-form configuration
// =============================================================================

/// Multipart part name the server reads the file from.
pub const DEFAULT_FIELD_NAME: &str = "file";

/// 200, plus the 302 the dashboard server answers with after a
/// successful upload.
pub const DEFAULT_ACCEPT_STATUS: [u16; 2] = [200, 302];

/// Upload settings for one form.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadConfig {
    /// Status codes treated as a successful upload.
    pub accept_status: Vec<u16>,
    /// Name of the multipart part carrying the file.
    pub field_name: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            accept_status: DEFAULT_ACCEPT_STATUS.to_vec(),
            field_name: DEFAULT_FIELD_NAME.to_string(),
        }
    }
}

impl UploadConfig {
    /// Parse the JSON held in [`CONFIG_ATTRIBUTE`]. Missing keys keep
    /// their defaults.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve the config for a form attribute value, falling back to the
    /// defaults when the attribute is absent or malformed.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::default(),
            Some(json) => Self::from_json(json).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid {}: {}", CONFIG_ATTRIBUTE, e);
                Self::default()
            }),
        }
    }

    pub fn is_accepted(&self, status: u16) -> bool {
        self.accept_status.contains(&status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_accept_ok_and_redirect() {
        let config = UploadConfig::default();
        assert!(config.is_accepted(200));
        assert!(config.is_accepted(302));
        assert!(!config.is_accepted(201));
        assert!(!config.is_accepted(500));
        assert_eq!(config.field_name, "file");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = UploadConfig::from_json(r#"{"acceptStatus": [200, 201, 303]}"#).unwrap();
        assert!(config.is_accepted(303));
        assert!(!config.is_accepted(302));
        assert_eq!(config.field_name, DEFAULT_FIELD_NAME);

        let config = UploadConfig::from_json(r#"{"fieldName": "document"}"#).unwrap();
        assert_eq!(config.field_name, "document");
        assert_eq!(config.accept_status, vec![200, 302]);
    }

    #[test]
    fn test_invalid_attribute_falls_back() {
        assert!(UploadConfig::from_json("{not json").is_err());
        assert_eq!(UploadConfig::from_attribute(Some("{not json")), UploadConfig::default());
        assert_eq!(UploadConfig::from_attribute(Some("   ")), UploadConfig::default());
        assert_eq!(UploadConfig::from_attribute(None), UploadConfig::default());
    }
}
