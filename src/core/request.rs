// MailTriage - core/request.rs
//
// Maps the active input into an `AnalysisRequest`. Pure: callers must
// have validated the input first.

use crate::core::model::{AnalysisRequest, InputMode, SelectedFile, TextPayload};

/// Content type sent with JSON submissions.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Build the request for the active mode.
///
/// Returns `None` only in file mode with nothing selected, which the
/// validator rejects before this is reached.
pub fn build(mode: InputMode, text: &str, file: Option<&SelectedFile>) -> Option<AnalysisRequest> {
    match mode {
        InputMode::TextDirect => Some(AnalysisRequest::Json(TextPayload {
            email_text: text.trim().to_string(),
        })),
        InputMode::FileUpload => file.map(|f| AnalysisRequest::Multipart {
            file_name: f.name.clone(),
            path: f.path.clone(),
        }),
    }
}

/// Explicit `Content-Type` header for the request, if any.
///
/// Multipart bodies return `None`: the transport sets the header together
/// with the boundary.
pub fn content_type(request: &AnalysisRequest) -> Option<&'static str> {
    match request {
        AnalysisRequest::Json(_) => Some(JSON_CONTENT_TYPE),
        AnalysisRequest::Multipart { .. } => None,
    }
}
