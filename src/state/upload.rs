//! Upload widget state machine.
//!
//! States: empty -> file selected -> processing -> result | error, with
//! `clear` returning to empty from any of them. The machine is plain data;
//! object URLs, the multipart call, and the clipboard all live in the
//! extractor component.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use serde_json::Value;

use crate::net::types::AnalysisResult;

/// Accepted uploads: any image type, or PDF. Everything else is silently
/// ignored at selection time.
pub fn is_supported_mime(mime: &str) -> bool {
    mime.starts_with("image/") || mime == "application/pdf"
}

/// Metadata of the chosen file. The live `web_sys::File` handle stays in
/// the component.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub size: f64,
}

impl SelectedFile {
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// The widget's full state. Replaced wholesale by `clear`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    pub file: Option<SelectedFile>,
    /// Object URL for image previews; PDFs never get one.
    pub preview: Option<String>,
    /// Text rendering of the latest result, for the result panel.
    pub text: String,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
    pub processing: bool,
    pub copied: bool,
}

impl UploadState {
    /// Accept a file choice (picker or drop). Unsupported MIME types leave
    /// the state untouched and return `false`.
    ///
    /// `preview` is invoked only for images, so PDFs always end up without
    /// one. A fresh selection discards any previous result or error.
    pub fn select<F>(&mut self, file: SelectedFile, preview: F) -> bool
    where
        F: FnOnce() -> Option<String>,
    {
        if !is_supported_mime(&file.mime) {
            return false;
        }
        self.preview = if file.is_image() { preview() } else { None };
        self.file = Some(file);
        self.text.clear();
        self.result = None;
        self.error = None;
        self.copied = false;
        true
    }

    /// Whether the extract action is currently allowed.
    pub fn can_extract(&self) -> bool {
        self.file.is_some() && !self.processing
    }

    /// Enter the processing state. Refused without a file or while already
    /// processing.
    pub fn begin(&mut self) -> bool {
        if !self.can_extract() {
            return false;
        }
        self.processing = true;
        self.error = None;
        self.result = None;
        true
    }

    /// Record a successful analysis and derive its display text.
    pub fn finish(&mut self, result: AnalysisResult) {
        self.text = result.display_text();
        self.result = Some(result);
        self.processing = false;
    }

    /// Record a failed analysis. The file stays selected so extract can be
    /// retried.
    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.processing = false;
    }

    /// Reset every field to its initial empty value. Not available while
    /// an analysis is in flight; there is no request cancellation.
    pub fn clear(&mut self) {
        if self.processing {
            return;
        }
        *self = Self::default();
    }

    pub fn set_copied(&mut self, copied: bool) {
        self.copied = copied;
    }
}

/// Render one extracted field value for the result grid.
pub fn field_display(value: &Value) -> String {
    match value {
        Value::Null => "N/A".to_owned(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Turn a snake_case field name into a display label.
pub fn field_label(key: &str) -> String {
    key.replace('_', " ")
}
