// MailTriage - app/controller.rs
//
// FormController: owns `FormState` and the submission manager, and is the
// only place state changes in response to user input.
//
// The UI layer translates egui input (clicks, key presses, dropped files)
// into `Command`s and calls `dispatch`. Once per frame it calls `poll`,
// which delivers the submission outcome and expires timers.

use crate::app::state::{FormState, Outcome, SubmitPhase};
use crate::app::submit::{SubmissionManager, SubmitProgress};
use crate::core::model::{AnalysisResult, InputMode};
use crate::core::render::ResultView;
use crate::core::validate::validate;
use crate::core::{request, samples};
use crate::platform::fs;
use crate::platform::http::AnalysisTransport;
use crate::util::error::{ClipboardError, ErrorKind, SubmitError, ValidationError};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Destination for the copy control.
pub trait ClipboardSink {
    fn write_text(&mut self, text: String) -> Result<(), ClipboardError>;
}

/// User intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Tab bar click.
    ActivateTab(InputMode),
    /// A path chosen in the file dialog or dropped on the window.
    SelectFile(PathBuf),
    /// The remove control next to the selected file.
    ClearFile,
    /// Submit button or Ctrl/Cmd+Enter.
    Submit,
    /// Close control on the error banner.
    DismissError,
    /// Escape anywhere: drop the banner and hide the results.
    Escape,
    /// Copy the suggested reply.
    CopyResponse,
    /// Load a built-in sample into the text panel.
    Prefill(String),
}

pub struct FormController {
    pub state: FormState,
    submissions: SubmissionManager,
    clipboard: Box<dyn ClipboardSink>,
}

impl FormController {
    pub fn new(transport: Arc<dyn AnalysisTransport>, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            state: FormState::new(),
            submissions: SubmissionManager::new(transport),
            clipboard,
        }
    }

    pub fn dispatch(&mut self, command: Command, now: Instant) {
        tracing::trace!(?command, "Dispatch");
        match command {
            Command::ActivateTab(mode) => {
                self.state.activate_tab(mode);
            }
            Command::SelectFile(path) => self.select_file(path, now),
            Command::ClearFile => self.state.clear_file(),
            Command::Submit => self.submit(now),
            Command::DismissError => {
                self.state.banner.dismiss();
            }
            Command::Escape => {
                self.state.banner.dismiss();
                self.state.hide_results();
            }
            Command::CopyResponse => self.copy_response(now),
            Command::Prefill(key) => self.prefill(&key),
        }
    }

    /// Per-frame housekeeping: deliver a finished submission and expire
    /// the banner and the copy glyph.
    pub fn poll(&mut self, now: Instant) {
        if let Some(progress) = self.submissions.poll() {
            match progress {
                SubmitProgress::Completed { result, elapsed } => {
                    tracing::debug!(
                        elapsed_ms = elapsed.as_millis() as u64,
                        ok = result.is_ok(),
                        "Submission outcome delivered"
                    );
                    self.finish(result, now);
                }
                SubmitProgress::Lost => {
                    tracing::error!("Submission worker stopped without a result");
                    self.fail(
                        ErrorKind::Request,
                        "The analysis stopped unexpectedly. Please try again.",
                        now,
                    );
                    self.settle();
                }
            }
        }

        self.state.banner.tick(now);

        if !self.state.copy_feedback_active(now) {
            self.state.copy_feedback_until = None;
        }
    }

    fn select_file(&mut self, path: PathBuf, now: Instant) {
        match fs::describe_file(&path) {
            Ok(file) => self.state.select_file(file),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Cannot use selected file");
                self.state.banner.show(
                    ErrorKind::Local,
                    format!("Could not open '{}': {e}", path.display()),
                    now,
                );
            }
        }
    }

    fn submit(&mut self, now: Instant) {
        if self.state.is_submitting() {
            tracing::debug!("Submit ignored: a request is already in flight");
            return;
        }

        let mode = self.state.active_tab;
        let file = self.state.selected_file.as_ref();

        if let Err(e) = validate(mode, &self.state.email_text, file) {
            tracing::info!(reason = e.tag(), ?mode, "Input rejected");
            if matches!(e, ValidationError::TooShort { .. }) {
                self.state.focus_text_requested = true;
            }
            self.state.banner.show(ErrorKind::Validation, e.to_string(), now);
            return;
        }

        let Some(req) = request::build(mode, &self.state.email_text, file) else {
            return;
        };

        // Idle -> Submitting
        self.state.phase = SubmitPhase::Submitting;
        self.state.hide_results();
        self.submissions.start(req);
    }

    /// Submitting -> {Success | Failed} -> Idle
    fn finish(&mut self, result: Result<AnalysisResult, SubmitError>, now: Instant) {
        match result {
            Ok(analysis) => {
                self.state
                    .show_results(ResultView::from_result(&analysis), now);
                self.state.last_outcome = Some(Outcome::Succeeded);
            }
            Err(e) => {
                let message = e.to_string();
                self.fail(e.kind(), message, now);
            }
        }
        self.settle();
    }

    fn fail(&mut self, kind: ErrorKind, message: impl Into<String>, now: Instant) {
        self.state.banner.show(kind, message, now);
        self.state.last_outcome = Some(Outcome::Failed);
    }

    /// Re-enable the submit control whatever the outcome.
    fn settle(&mut self) {
        self.state.phase = SubmitPhase::Idle;
    }

    fn copy_response(&mut self, now: Instant) {
        let Some(results) = &self.state.results else {
            self.state
                .banner
                .show(ErrorKind::Local, "There is no suggested response to copy.", now);
            return;
        };

        let text = results.view.clipboard_text();
        match self.clipboard.write_text(text) {
            Ok(()) => {
                tracing::debug!("Suggested response copied");
                self.state.start_copy_feedback(now);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard write failed");
                self.state.banner.show(ErrorKind::Local, e.to_string(), now);
            }
        }
    }

    fn prefill(&mut self, key: &str) {
        match samples::lookup(key) {
            Some(text) => {
                self.state.activate_tab(InputMode::TextDirect);
                self.state.email_text = text.to_string();
                tracing::info!(sample = key, "Text panel prefilled");
            }
            None => tracing::warn!(
                sample = key,
                known = ?samples::keys(),
                "Unknown sample; nothing prefilled"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{AnalysisRequest, SuggestedResponse};
    use crate::util::constants::{ERROR_BANNER_TIMEOUT_MS, MAX_UPLOAD_BYTES};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records every request and replies with a canned outcome.
    struct FakeTransport {
        requests: Mutex<Vec<AnalysisRequest>>,
        reply: fn() -> Result<AnalysisResult, SubmitError>,
    }

    impl FakeTransport {
        fn new(reply: fn() -> Result<AnalysisResult, SubmitError>) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                reply,
            })
        }

        fn sent(&self) -> Vec<AnalysisRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl AnalysisTransport for FakeTransport {
        fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, SubmitError> {
            self.requests.lock().unwrap().push(request.clone());
            (self.reply)()
        }
    }

    struct RecordingClipboard(Arc<Mutex<Vec<String>>>);

    impl ClipboardSink for RecordingClipboard {
        fn write_text(&mut self, text: String) -> Result<(), ClipboardError> {
            self.0.lock().unwrap().push(text);
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl ClipboardSink for BrokenClipboard {
        fn write_text(&mut self, _text: String) -> Result<(), ClipboardError> {
            Err(ClipboardError {
                reason: "no display".to_string(),
            })
        }
    }

    fn status_reply() -> Result<AnalysisResult, SubmitError> {
        Ok(AnalysisResult {
            category: "Status".to_string(),
            email_type: "Consulta".to_string(),
            priority: "Média".to_string(),
            processing_time: 0.42,
            word_count: 24,
            confidence: None,
            suggested_response: SuggestedResponse {
                subject: "Re: Status".to_string(),
                body: "Estamos verificando.".to_string(),
            },
        })
    }

    fn server_failure() -> Result<AnalysisResult, SubmitError> {
        Err(SubmitError::Server {
            status: 500,
            message: "internal failure".to_string(),
        })
    }

    fn controller(transport: Arc<FakeTransport>) -> FormController {
        FormController::new(transport, Box::new(BrokenClipboard))
    }

    /// Poll until the in-flight submission settles.
    fn settle(c: &mut FormController) -> Instant {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let now = Instant::now();
            c.poll(now);
            if !c.state.is_submitting() {
                return now;
            }
            assert!(now < deadline, "submission did not settle");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_too_short_blocks_request() {
        let transport = FakeTransport::new(status_reply);
        let mut c = controller(transport.clone());
        c.state.email_text = "hi".to_string();

        c.dispatch(Command::Submit, Instant::now());

        assert!(transport.sent().is_empty());
        assert!(!c.state.is_submitting());
        assert!(c.state.focus_text_requested);
        let banner = c.state.banner.current().unwrap();
        assert_eq!(banner.kind, ErrorKind::Validation);
        assert!(banner.message.contains("too short"));
    }

    #[test]
    fn test_text_submission_success_renders_result() {
        let transport = FakeTransport::new(status_reply);
        let mut c = controller(transport.clone());
        let text = "Olá, gostaria de saber o status...";
        c.state.email_text = format!("  {text}\n");

        c.dispatch(Command::Submit, Instant::now());
        assert!(c.state.is_submitting());
        assert!(!c.state.submit_enabled());
        settle(&mut c);

        match transport.sent().as_slice() {
            [AnalysisRequest::Json(payload)] => assert_eq!(payload.email_text, text),
            other => panic!("unexpected requests {other:?}"),
        }

        assert_eq!(c.state.last_outcome, Some(Outcome::Succeeded));
        assert!(c.state.submit_enabled());
        let shown = c.state.results.as_ref().unwrap();
        assert!(shown.scroll_pending);
        assert_eq!(shown.view.category_class, "category-badge status");
        assert_eq!(shown.view.priority_class, "priority-média");
        assert_eq!(shown.view.processing_time, "0.42s");
        assert!(c.state.banner.current().is_none());
    }

    #[test]
    fn test_server_error_shows_banner_and_reenables_submit() {
        let transport = FakeTransport::new(server_failure);
        let mut c = controller(transport.clone());
        c.state.email_text = "Preciso de ajuda com o sistema".to_string();

        c.dispatch(Command::Submit, Instant::now());
        let t = settle(&mut c);

        assert_eq!(transport.sent().len(), 1);
        assert_eq!(c.state.last_outcome, Some(Outcome::Failed));
        assert!(c.state.submit_enabled());
        assert!(c.state.results.is_none());
        assert_eq!(
            c.state.banner.current().unwrap().message,
            "internal failure"
        );

        c.poll(t + Duration::from_millis(ERROR_BANNER_TIMEOUT_MS));
        assert!(c.state.banner.current().is_none());
    }

    #[test]
    fn test_escape_dismisses_banner_and_hides_results() {
        let transport = FakeTransport::new(status_reply);
        let mut c = controller(transport);
        c.state.email_text = "Qual o status do meu pedido?".to_string();
        c.dispatch(Command::Submit, Instant::now());
        let t = settle(&mut c);
        c.state.banner.show(ErrorKind::Request, "internal failure", t);

        c.dispatch(Command::Escape, t);
        assert!(c.state.banner.current().is_none());
        assert!(c.state.results.is_none());
    }

    #[test]
    fn test_submit_while_in_flight_is_ignored() {
        let transport = FakeTransport::new(status_reply);
        let mut c = controller(transport.clone());
        c.state.email_text = "Qual o status do meu pedido?".to_string();

        let t0 = Instant::now();
        c.dispatch(Command::Submit, t0);
        c.dispatch(Command::Submit, t0);
        settle(&mut c);

        assert_eq!(transport.sent().len(), 1);
    }

    #[test]
    fn test_new_submission_hides_previous_results() {
        let transport = FakeTransport::new(status_reply);
        let mut c = controller(transport);
        c.state.email_text = "Qual o status do meu pedido?".to_string();
        c.dispatch(Command::Submit, Instant::now());
        settle(&mut c);
        assert!(c.state.results.is_some());

        // The outcome is only delivered by poll(), so the state is still
        // Submitting here regardless of how fast the worker is.
        c.dispatch(Command::Submit, Instant::now());
        assert!(c.state.is_submitting());
        assert!(c.state.results.is_none());
        settle(&mut c);
        assert!(c.state.results.is_some());
    }

    #[test]
    fn test_unsupported_file_blocks_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("malware.exe");
        std::fs::write(&path, b"MZ").unwrap();

        let transport = FakeTransport::new(status_reply);
        let mut c = controller(transport.clone());
        let now = Instant::now();
        c.dispatch(Command::ActivateTab(InputMode::FileUpload), now);
        c.dispatch(Command::SelectFile(path), now);
        assert_eq!(c.state.selected_file.as_ref().unwrap().name, "malware.exe");

        c.dispatch(Command::Submit, now);
        assert!(transport.sent().is_empty());
        assert!(c.state.banner.current().unwrap().message.contains("Unsupported type"));
    }

    #[test]
    fn test_file_mode_without_selection() {
        let transport = FakeTransport::new(status_reply);
        let mut c = controller(transport.clone());
        let now = Instant::now();
        c.dispatch(Command::ActivateTab(InputMode::FileUpload), now);
        c.dispatch(Command::Submit, now);
        assert!(transport.sent().is_empty());
        assert_eq!(c.state.banner.current().unwrap().kind, ErrorKind::Validation);
        assert!(!c.state.focus_text_requested);
    }

    #[test]
    fn test_file_submission_sends_multipart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mail.txt");
        std::fs::write(&path, "Segue em anexo o relatório.").unwrap();

        let transport = FakeTransport::new(status_reply);
        let mut c = controller(transport.clone());
        let now = Instant::now();
        c.dispatch(Command::ActivateTab(InputMode::FileUpload), now);
        c.dispatch(Command::SelectFile(path.clone()), now);
        c.dispatch(Command::Submit, now);
        settle(&mut c);

        assert_eq!(
            transport.sent(),
            vec![AnalysisRequest::Multipart {
                file_name: "mail.txt".to_string(),
                path,
            }]
        );
        assert_eq!(c.state.last_outcome, Some(Outcome::Succeeded));
    }

    #[test]
    fn test_oversized_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.pdf");
        let f = std::fs::File::create(&path).unwrap();
        f.set_len(MAX_UPLOAD_BYTES + 1).unwrap();

        let transport = FakeTransport::new(status_reply);
        let mut c = controller(transport.clone());
        let now = Instant::now();
        c.dispatch(Command::ActivateTab(InputMode::FileUpload), now);
        c.dispatch(Command::SelectFile(path), now);
        c.dispatch(Command::Submit, now);
        assert!(transport.sent().is_empty());
        assert!(c.state.banner.current().unwrap().message.contains("too large"));
    }

    #[test]
    fn test_missing_file_selection_reports_error() {
        let transport = FakeTransport::new(status_reply);
        let mut c = controller(transport);
        c.dispatch(
            Command::SelectFile(PathBuf::from("/definitely/not/here.txt")),
            Instant::now(),
        );
        assert!(c.state.selected_file.is_none());
        assert_eq!(c.state.banner.current().unwrap().kind, ErrorKind::Local);
    }

    #[test]
    fn test_copy_success_and_feedback() {
        let copied = Arc::new(Mutex::new(Vec::new()));
        let transport = FakeTransport::new(status_reply);
        let mut c = FormController::new(transport, Box::new(RecordingClipboard(copied.clone())));
        c.state.email_text = "Qual o status do meu pedido?".to_string();
        c.dispatch(Command::Submit, Instant::now());
        let t = settle(&mut c);

        c.dispatch(Command::CopyResponse, t);
        assert_eq!(
            copied.lock().unwrap().as_slice(),
            ["Subject: Re: Status\n\nEstamos verificando.".to_string()]
        );
        assert!(c.state.copy_feedback_active(t));

        c.poll(t + Duration::from_secs(3));
        assert!(c.state.copy_feedback_until.is_none());
    }

    #[test]
    fn test_copy_failure_routes_to_banner() {
        let transport = FakeTransport::new(status_reply);
        let mut c = controller(transport);
        c.state.email_text = "Qual o status do meu pedido?".to_string();
        c.dispatch(Command::Submit, Instant::now());
        let t = settle(&mut c);

        c.dispatch(Command::CopyResponse, t);
        assert!(!c.state.copy_feedback_active(t));
        let banner = c.state.banner.current().unwrap();
        assert_eq!(banner.kind, ErrorKind::Local);
        assert!(banner.message.contains("no display"));
    }

    #[test]
    fn test_copy_without_results() {
        let transport = FakeTransport::new(status_reply);
        let mut c = controller(transport);
        c.dispatch(Command::CopyResponse, Instant::now());
        assert!(c.state.banner.current().is_some());
    }

    #[test]
    fn test_prefill_switches_to_text_tab() {
        let transport = FakeTransport::new(status_reply);
        let mut c = controller(transport);
        let now = Instant::now();
        c.dispatch(Command::ActivateTab(InputMode::FileUpload), now);

        c.dispatch(Command::Prefill("suporte".to_string()), now);
        assert!(c.state.is_active(InputMode::TextDirect));
        assert!(c.state.email_text.starts_with("Bom dia"));

        c.dispatch(Command::Prefill("nope".to_string()), now);
        assert!(c.state.email_text.starts_with("Bom dia"));
    }

    #[test]
    fn test_dismiss_error() {
        let transport = FakeTransport::new(status_reply);
        let mut c = controller(transport);
        let now = Instant::now();
        c.dispatch(Command::Submit, now);
        assert!(c.state.banner.current().is_some());
        c.dispatch(Command::DismissError, now);
        assert!(c.state.banner.current().is_none());
    }
}
