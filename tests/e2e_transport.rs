// MailTriage - tests/e2e_transport.rs
//
// End-to-end tests for the submission pipeline.
//
// These tests drive the real reqwest transport against a mockito server.
// Each mock matches the request shape (method, path, content type, body)
// and answers with a canned status and body, so the full path from
// `FormController::dispatch(Submit)` to the rendered result or error
// banner runs over a real socket.

use mailtriage::app::controller::{ClipboardSink, Command, FormController};
use mailtriage::app::state::Outcome;
use mailtriage::core::model::{AnalysisRequest, InputMode, TextPayload};
use mailtriage::platform::http::{AnalysisTransport, HttpTransport};
use mailtriage::util::error::{ClipboardError, ErrorKind, SubmitError};
use mockito::Matcher;
use serde_json::json;
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

// =============================================================================
// Helpers
// =============================================================================

const SUCCESS_BODY: &str = r#"{
    "category": "Status",
    "email_type": "Consulta de status",
    "priority": "Média",
    "processing_time": 0.37,
    "word_count": 6,
    "suggested_response": {
        "subject": "Re: Status do chamado",
        "body": "Olá! <b>Seu chamado</b> está em andamento."
    }
}"#;

const STATUS_TEXT: &str = "Qual o status do meu chamado?";

fn endpoint(server: &mockito::ServerGuard) -> String {
    format!("{}/analyze", server.url())
}

/// An endpoint on a port nobody listens on.
fn refused_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/analyze")
}

fn transport(endpoint: &str) -> HttpTransport {
    HttpTransport::new(endpoint, Duration::from_secs(10)).unwrap()
}

fn text_request(text: &str) -> AnalysisRequest {
    AnalysisRequest::Json(TextPayload {
        email_text: text.to_string(),
    })
}

/// Mock for a JSON text submission carrying exactly `text`.
fn json_mock(
    server: &mut mockito::ServerGuard,
    text: &str,
    status: usize,
    body: &str,
) -> mockito::Mock {
    server
        .mock("POST", "/analyze")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({ "email_text": text })))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

/// Mock for a multipart upload of `file_name` under field "file".
fn multipart_mock(server: &mut mockito::ServerGuard, file_name: &str) -> mockito::Mock {
    server
        .mock("POST", "/analyze")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file""#.to_string()),
            Matcher::Regex(format!(r#"filename="{file_name}""#)),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SUCCESS_BODY)
        .create()
}

struct NullClipboard;

impl ClipboardSink for NullClipboard {
    fn write_text(&mut self, _text: String) -> Result<(), ClipboardError> {
        Ok(())
    }
}

fn controller(endpoint: &str) -> FormController {
    FormController::new(Arc::new(transport(endpoint)), Box::new(NullClipboard))
}

/// Poll until the in-flight submission settles.
fn settle(controller: &mut FormController) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while controller.state.is_submitting() {
        assert!(Instant::now() < deadline, "submission did not settle");
        thread::sleep(Duration::from_millis(10));
        controller.poll(Instant::now());
    }
}

// =============================================================================
// Transport E2E
// =============================================================================

/// Text submissions are posted as JSON and the reply decodes into a result.
#[test]
fn e2e_text_request_is_posted_as_json() {
    let mut server = mockito::Server::new();
    let mock = json_mock(&mut server, STATUS_TEXT, 200, SUCCESS_BODY);

    let result = transport(&endpoint(&server))
        .analyze(&text_request(STATUS_TEXT))
        .unwrap();

    assert_eq!(result.category, "Status");
    assert_eq!(result.priority, "Média");
    assert_eq!(result.word_count, 6);
    assert_eq!(result.confidence, None);
    mock.assert();
}

/// File submissions are posted as multipart with the file under field "file".
#[test]
fn e2e_file_request_is_posted_as_multipart() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/analyze")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file""#.to_string()),
            Matcher::Regex(r#"filename="pedido.txt""#.to_string()),
            Matcher::Regex("Preciso de uma atualização sobre o pedido 42".to_string()),
        ]))
        .with_status(200)
        .with_body(SUCCESS_BODY)
        .create();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pedido.txt");
    std::fs::write(&path, "Preciso de uma atualização sobre o pedido 42.").unwrap();

    let request = AnalysisRequest::Multipart {
        file_name: "pedido.txt".to_string(),
        path,
    };
    transport(&endpoint(&server)).analyze(&request).unwrap();

    mock.assert();
}

/// A failure status surfaces the server's `error` text verbatim.
#[test]
fn e2e_server_error_message_is_used() {
    let mut server = mockito::Server::new();
    let mock = json_mock(
        &mut server,
        "hello there",
        500,
        r#"{"error":"internal failure"}"#,
    );

    let err = transport(&endpoint(&server))
        .analyze(&text_request("hello there"))
        .unwrap_err();

    match &err {
        SubmitError::Server { status, message } => {
            assert_eq!(*status, 500);
            assert_eq!(message, "internal failure");
        }
        other => panic!("expected Server error, got {other:?}"),
    }
    assert_eq!(err.kind(), ErrorKind::Request);
    mock.assert();
}

/// A failure status with an unparsable body falls back to a generic message.
#[test]
fn e2e_unparsable_error_body_gets_generic_message() {
    let mut server = mockito::Server::new();
    let mock = json_mock(&mut server, "hello there", 502, "<html>upstream down</html>");

    let err = transport(&endpoint(&server))
        .analyze(&text_request("hello there"))
        .unwrap_err();

    assert_eq!(err.to_string(), "Unexpected status 502 Bad Gateway");
    mock.assert();
}

/// A blank `error` field falls back to the generic message too.
#[test]
fn e2e_blank_error_field_gets_generic_message() {
    let mut server = mockito::Server::new();
    let mock = json_mock(&mut server, "hello there", 500, r#"{"error":""}"#);

    let err = transport(&endpoint(&server))
        .analyze(&text_request("hello there"))
        .unwrap_err();

    assert_eq!(err.to_string(), "Unexpected status 500 Internal Server Error");
    mock.assert();
}

/// A 2xx body that is not an analysis result is a request failure.
#[test]
fn e2e_invalid_success_body_is_rejected() {
    let mut server = mockito::Server::new();
    let mock = json_mock(&mut server, "hello there", 200, r#"{"unexpected": true}"#);

    let err = transport(&endpoint(&server))
        .analyze(&text_request("hello there"))
        .unwrap_err();

    assert!(matches!(err, SubmitError::InvalidResponse { .. }), "got {err:?}");
    assert_eq!(err.kind(), ErrorKind::Request);
    mock.assert();
}

/// No listener on the port: the connection error message is shown.
#[test]
fn e2e_connection_refused_is_network_error() {
    let err = transport(&refused_endpoint())
        .analyze(&text_request("hello there"))
        .unwrap_err();

    assert!(matches!(err, SubmitError::Network { .. }), "got {err:?}");
    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(
        err.to_string(),
        "Connection error. Check your connection and try again."
    );
}

/// An upload whose file vanished before submission is a local error.
#[test]
fn e2e_missing_upload_file_is_read_error() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/analyze").expect(0).create();

    let dir = tempfile::tempdir().unwrap();
    let request = AnalysisRequest::Multipart {
        file_name: "gone.txt".to_string(),
        path: dir.path().join("gone.txt"),
    };
    let err = transport(&endpoint(&server)).analyze(&request).unwrap_err();

    assert!(matches!(err, SubmitError::ReadFile { .. }), "got {err:?}");
    mock.assert();
}

// =============================================================================
// Controller E2E
// =============================================================================

/// Paste text, submit, and read back the rendered result.
#[test]
fn e2e_controller_success_renders_result() {
    let mut server = mockito::Server::new();
    // Text is trimmed before it leaves the client.
    let mock = json_mock(&mut server, STATUS_TEXT, 200, SUCCESS_BODY);
    let mut c = controller(&endpoint(&server));

    c.state.email_text = format!("  {STATUS_TEXT}  ");
    c.dispatch(Command::Submit, Instant::now());
    assert!(c.state.is_submitting());
    assert!(!c.state.submit_enabled());

    settle(&mut c);

    assert_eq!(c.state.last_outcome, Some(Outcome::Succeeded));
    assert!(c.state.banner.current().is_none());
    let shown = c.state.results.as_ref().expect("results visible");
    assert_eq!(shown.view.category, "Status");
    assert_eq!(shown.view.category_class, "category-badge status");
    assert_eq!(shown.view.priority_class, "priority-média");
    assert_eq!(shown.view.processing_time, "0.37s");
    assert_eq!(shown.view.confidence, "Média");
    assert_eq!(
        shown.view.response_body,
        "Olá! <b>Seu chamado</b> está em andamento."
    );
    mock.assert();
}

/// Server failure: banner shows the server text, controls re-enabled.
#[test]
fn e2e_controller_server_error_shows_banner() {
    let mut server = mockito::Server::new();
    let mock = json_mock(
        &mut server,
        STATUS_TEXT,
        500,
        r#"{"error":"internal failure"}"#,
    );
    let mut c = controller(&endpoint(&server));

    c.state.email_text = STATUS_TEXT.to_string();
    c.dispatch(Command::Submit, Instant::now());
    settle(&mut c);

    assert_eq!(c.state.last_outcome, Some(Outcome::Failed));
    assert!(c.state.submit_enabled());
    assert!(c.state.results.is_none());
    let banner = c.state.banner.current().expect("banner visible");
    assert_eq!(banner.message, "internal failure");
    assert_eq!(banner.kind, ErrorKind::Request);

    c.dispatch(Command::Escape, Instant::now());
    assert!(c.state.banner.current().is_none());
    mock.assert();
}

/// Upload tab: select a file from disk and submit it.
#[test]
fn e2e_controller_uploads_selected_file() {
    let mut server = mockito::Server::new();
    let mock = multipart_mock(&mut server, "Email.PDF");
    let mut c = controller(&endpoint(&server));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Email.PDF");
    std::fs::write(&path, b"%PDF-1.4 fake").unwrap();

    let now = Instant::now();
    c.dispatch(Command::ActivateTab(InputMode::FileUpload), now);
    c.dispatch(Command::SelectFile(path), now);
    let selected = c.state.selected_file.as_ref().expect("file selected");
    assert_eq!(selected.name, "Email.PDF");
    assert_eq!(selected.size, 13);

    c.dispatch(Command::Submit, now);
    settle(&mut c);

    assert_eq!(c.state.last_outcome, Some(Outcome::Succeeded));
    mock.assert();
}

/// Unreachable service: connection banner, controls re-enabled.
#[test]
fn e2e_controller_network_failure_shows_connection_banner() {
    let mut c = controller(&refused_endpoint());

    c.state.email_text = STATUS_TEXT.to_string();
    c.dispatch(Command::Submit, Instant::now());
    settle(&mut c);

    assert_eq!(c.state.last_outcome, Some(Outcome::Failed));
    assert!(c.state.submit_enabled());
    let banner = c.state.banner.current().expect("banner visible");
    assert_eq!(banner.kind, ErrorKind::Network);
    assert_eq!(
        banner.message,
        "Connection error. Check your connection and try again."
    );
}
