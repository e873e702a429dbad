// MailTriage - app/state.rs
//
// Form state. Holds the active tab, both input panels, the submission
// phase, the visible results and the error banner.
// Owned by `FormController`; panels read it and edit the text in place.

use crate::app::banner::ErrorPresenter;
use crate::core::model::{InputMode, SelectedFile};
use crate::core::render::ResultView;
use crate::core::validate::{self, TextValidity};
use crate::util::constants::COPY_FEEDBACK_MS;
use std::time::{Duration, Instant};

/// Whether a request is outstanding. `Submitting` locks the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// How the most recent submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

/// Results currently on screen.
#[derive(Debug, Clone)]
pub struct ShownResults {
    pub view: ResultView,

    /// When the panel was revealed; drives the entrance animation.
    pub revealed_at: Instant,

    /// Set on reveal, cleared by the panel once it has scrolled into view.
    pub scroll_pending: bool,
}

/// Top-level form state.
#[derive(Debug, Default)]
pub struct FormState {
    /// Active input tab. Being a single value, exactly one tab is active.
    pub active_tab: InputMode,

    /// Contents of the text panel (raw, untrimmed).
    pub email_text: String,

    /// File chosen in the upload panel. `None` shows the drop area.
    pub selected_file: Option<SelectedFile>,

    pub phase: SubmitPhase,

    /// Outcome of the last finished submission, if any.
    pub last_outcome: Option<Outcome>,

    pub results: Option<ShownResults>,

    pub banner: ErrorPresenter,

    /// While set and in the future, the copy control shows a check glyph.
    pub copy_feedback_until: Option<Instant>,

    /// One-shot request for the text panel to grab keyboard focus.
    pub focus_text_requested: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self, mode: InputMode) -> bool {
        self.active_tab == mode
    }

    /// Activate `mode`, clearing the panel being switched away from.
    ///
    /// Leaving the text panel empties it (which resets the counter); leaving
    /// the file panel drops the selection (which brings back the drop area).
    /// Returns false when `mode` was already active.
    pub fn activate_tab(&mut self, mode: InputMode) -> bool {
        if self.active_tab == mode {
            return false;
        }
        match mode {
            InputMode::TextDirect => self.clear_file(),
            InputMode::FileUpload => self.email_text.clear(),
        }
        tracing::debug!(from = ?self.active_tab, to = ?mode, "Tab switched");
        self.active_tab = mode;
        true
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        tracing::info!(file = %file.name, size = file.size, "File selected");
        self.selected_file = Some(file);
    }

    pub fn clear_file(&mut self) {
        self.selected_file = None;
    }

    /// Raw character count shown by the counter.
    pub fn char_count(&self) -> usize {
        self.email_text.chars().count()
    }

    pub fn text_validity(&self) -> TextValidity {
        validate::text_validity(&self.email_text)
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// The submit control is enabled whenever no request is outstanding.
    pub fn submit_enabled(&self) -> bool {
        !self.is_submitting()
    }

    pub fn show_results(&mut self, view: ResultView, now: Instant) {
        self.results = Some(ShownResults {
            view,
            revealed_at: now,
            scroll_pending: true,
        });
    }

    pub fn hide_results(&mut self) {
        self.results = None;
    }

    pub fn copy_feedback_active(&self, now: Instant) -> bool {
        self.copy_feedback_until.is_some_and(|until| now < until)
    }

    pub fn start_copy_feedback(&mut self, now: Instant) {
        self.copy_feedback_until = Some(now + Duration::from_millis(COPY_FEEDBACK_MS));
    }
}
