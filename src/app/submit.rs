// MailTriage - app/submit.rs
//
// Submission lifecycle. Runs the single network round trip on a worker
// thread and delivers the outcome to the UI thread via an mpsc channel.
//
// Architecture:
//   - `SubmissionManager` lives on the UI thread; `run_submission` runs on
//     a short-lived worker thread, one per submission.
//   - Exactly one `SubmitProgress` message is sent per submission.
//   - There is no cancellation: once sent, a request runs to completion.
//     The controller's Submitting lock prevents starting a second one.

use crate::core::model::{AnalysisRequest, AnalysisResult};
use crate::platform::http::AnalysisTransport;
use crate::util::error::SubmitError;
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

/// Messages from the worker thread.
#[derive(Debug)]
pub enum SubmitProgress {
    /// The request finished, successfully or not.
    Completed {
        result: Result<AnalysisResult, SubmitError>,
        elapsed: Duration,
    },

    /// The worker went away without reporting (it panicked).
    Lost,
}

/// Manages the in-flight submission, if any.
pub struct SubmissionManager {
    transport: Arc<dyn AnalysisTransport>,

    /// Receiver for the in-flight submission. `None` when idle.
    progress_rx: Option<mpsc::Receiver<SubmitProgress>>,
}

impl SubmissionManager {
    pub fn new(transport: Arc<dyn AnalysisTransport>) -> Self {
        Self {
            transport,
            progress_rx: None,
        }
    }

    pub fn in_flight(&self) -> bool {
        self.progress_rx.is_some()
    }

    /// Send `request` on a worker thread.
    ///
    /// Callers must not start while `in_flight()`; the previous receiver
    /// would be replaced and its outcome never observed.
    pub fn start(&mut self, request: AnalysisRequest) {
        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        let transport = Arc::clone(&self.transport);
        tracing::info!(kind = request.kind(), "Submission started");

        std::thread::spawn(move || {
            run_submission(transport.as_ref(), &request, tx);
        });
    }

    /// Poll for the outcome without blocking.
    ///
    /// Returns `None` while the request is still running or when idle.
    pub fn poll(&mut self) -> Option<SubmitProgress> {
        let rx = self.progress_rx.as_ref()?;
        let progress = match rx.try_recv() {
            Ok(msg) => msg,
            Err(mpsc::TryRecvError::Empty) => return None,
            Err(mpsc::TryRecvError::Disconnected) => SubmitProgress::Lost,
        };
        self.progress_rx = None;
        Some(progress)
    }
}

/// Worker body: one attempt, one message.
fn run_submission(
    transport: &dyn AnalysisTransport,
    request: &AnalysisRequest,
    tx: mpsc::Sender<SubmitProgress>,
) {
    let started = Instant::now();
    let result = transport.analyze(request);
    let elapsed = started.elapsed();

    match &result {
        Ok(r) => tracing::info!(
            elapsed_ms = elapsed.as_millis() as u64,
            category = %r.category,
            "Submission succeeded"
        ),
        Err(e) => tracing::warn!(
            elapsed_ms = elapsed.as_millis() as u64,
            error = %e,
            "Submission failed"
        ),
    }

    // Receiver dropped (UI closed); nothing left to notify.
    let _ = tx.send(SubmitProgress::Completed { result, elapsed });
}
