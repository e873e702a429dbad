// MailTriage - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies; serde derives give them their wire shape.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// =============================================================================
// Input mode
// =============================================================================

/// Which input panel is active. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMode {
    #[default]
    TextDirect,
    FileUpload,
}

impl InputMode {
    /// Returns all variants in tab-bar order.
    pub fn all() -> &'static [InputMode] {
        &[InputMode::TextDirect, InputMode::FileUpload]
    }

    /// Human-readable tab label.
    pub fn label(&self) -> &'static str {
        match self {
            InputMode::TextDirect => "Paste text",
            InputMode::FileUpload => "Upload file",
        }
    }
}

// =============================================================================
// Selected file
// =============================================================================

/// Descriptor of the file chosen in the upload panel.
///
/// Only metadata is held; the bytes are read when the request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as shown to the user and sent to the server.
    pub name: String,

    /// Size in bytes at selection time.
    pub size: u64,

    /// Full path on disk.
    pub path: PathBuf,
}

// =============================================================================
// Analysis request
// =============================================================================

/// JSON body for a text submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPayload {
    pub email_text: String,
}

/// One analysis request. The variant is decided by the active `InputMode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    /// `Content-Type: application/json` with `{"email_text": ...}`.
    Json(TextPayload),

    /// `multipart/form-data` with the raw file in a single part.
    /// The transport chooses the boundary and content type.
    Multipart { file_name: String, path: PathBuf },
}

impl AnalysisRequest {
    /// Label used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Multipart { .. } => "multipart",
        }
    }
}

// =============================================================================
// Analysis result
// =============================================================================

/// Reply template proposed by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedResponse {
    pub subject: String,
    pub body: String,
}

/// Success body of `POST /analyze`. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub category: String,
    pub email_type: String,
    pub priority: String,
    pub processing_time: f64,
    pub word_count: u64,
    #[serde(default)]
    pub confidence: Option<String>,
    pub suggested_response: SuggestedResponse,
}

/// Failure body of `POST /analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}
