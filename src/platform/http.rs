// MailTriage - platform/http.rs
//
// HTTP transport for `POST /analyze`.
//
// `AnalysisTransport` is the seam between the submission manager and the
// network: the real implementation uses a blocking reqwest client (it runs
// on the submission worker thread, never the UI thread), tests substitute
// an in-memory fake.
//
// Exactly one attempt per request. No retries.

use crate::core::model::{AnalysisRequest, AnalysisResult, ErrorBody};
use crate::core::request;
use crate::platform::config::{check_endpoint, AppConfig};
use crate::util::constants::UPLOAD_FIELD_NAME;
use crate::util::error::{self, SubmitError};
use reqwest::blocking::{multipart, Client};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Sends one analysis request and returns the decoded result.
pub trait AnalysisTransport: Send + Sync {
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, SubmitError>;
}

/// reqwest-backed transport posting to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| SubmitError::Client { source })?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Build the transport for `config`. A command-line `endpoint_override`
/// replaces the configured endpoint after the same URL check.
pub fn connect(config: &AppConfig, endpoint_override: Option<String>) -> error::Result<HttpTransport> {
    let endpoint = match endpoint_override {
        Some(endpoint) => {
            check_endpoint("--endpoint", &endpoint)?;
            endpoint
        }
        None => config.endpoint.clone(),
    };
    Ok(HttpTransport::new(&endpoint, config.timeout())?)
}

impl AnalysisTransport for HttpTransport {
    fn analyze(&self, req: &AnalysisRequest) -> Result<AnalysisResult, SubmitError> {
        let mut builder = self.client.post(&self.endpoint);
        if let Some(content_type) = request::content_type(req) {
            builder = builder.header(CONTENT_TYPE, content_type);
        }

        builder = match req {
            AnalysisRequest::Json(payload) => {
                let body = serde_json::to_vec(payload)
                    .map_err(|source| SubmitError::Encode { source })?;
                builder.body(body)
            }
            AnalysisRequest::Multipart { file_name, path } => {
                let bytes = std::fs::read(path).map_err(|source| SubmitError::ReadFile {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(file = %file_name, bytes = bytes.len(), "Upload read");
                let part = multipart::Part::bytes(bytes).file_name(file_name.clone());
                builder.multipart(multipart::Form::new().part(UPLOAD_FIELD_NAME, part))
            }
        };

        let response = builder
            .send()
            .map_err(|source| SubmitError::Network { source })?;

        let status = response.status();
        let body = response.text();
        settle_response(status.as_u16(), status.canonical_reason(), body)
    }
}

/// A body that cannot be read is a network failure only on success; a
/// failure status still yields the generic status message.
fn settle_response(
    status: u16,
    reason: Option<&str>,
    body: Result<String, reqwest::Error>,
) -> Result<AnalysisResult, SubmitError> {
    match body {
        Ok(body) => interpret_response(status, reason, &body),
        Err(source) if (200..300).contains(&status) => Err(SubmitError::Network { source }),
        Err(e) => {
            tracing::warn!(status, error = %e, "Error response body unreadable");
            interpret_response(status, reason, "")
        }
    }
}

/// Map a raw status + body to the analysis outcome.
///
/// 2xx bodies must decode as `AnalysisResult`. Any other status yields
/// `SubmitError::Server` with the body's `error` field, or a generic
/// "Unexpected status" message when the body has none.
pub fn interpret_response(
    status: u16,
    reason: Option<&str>,
    body: &str,
) -> Result<AnalysisResult, SubmitError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|source| SubmitError::InvalidResponse { source });
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| match reason {
            Some(reason) => format!("Unexpected status {status} {reason}"),
            None => format!("Unexpected status {status}"),
        });

    Err(SubmitError::Server { status, message })
}
