// MailTriage - core/render.rs
//
// Pure projection from an `AnalysisResult` to the text shown in each
// results slot. No egui types here so the projection is testable without
// a window; `ui::panels::results` draws whatever this produces.
//
// Slot values are plain strings. Labels never interpret markup, so text
// reflected back by the server is displayed literally.

use crate::core::model::AnalysisResult;
use crate::util::constants::{DEFAULT_CONFIDENCE, RESULTS_ENTRANCE_MS, RESULTS_ENTRANCE_OFFSET};
use std::time::Duration;

/// Everything the results panel displays, keyed by slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub category: String,
    pub email_type: String,
    pub priority: String,
    pub processing_time: String,
    pub word_count: String,
    pub confidence: String,
    pub response_subject: String,
    pub response_body: String,

    /// Class string for the category badge, e.g. `category-badge status`.
    pub category_class: String,

    /// Class string for the priority badge, e.g. `priority-média`.
    pub priority_class: String,
}

impl ResultView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            category: result.category.clone(),
            email_type: result.email_type.clone(),
            priority: result.priority.clone(),
            processing_time: format!("{}s", result.processing_time),
            word_count: result.word_count.to_string(),
            confidence: result
                .confidence
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CONFIDENCE.to_string()),
            response_subject: result.suggested_response.subject.clone(),
            response_body: result.suggested_response.body.clone(),
            category_class: category_class(&result.category),
            priority_class: priority_class(&result.priority),
        }
    }

    /// Text written to the clipboard by the copy control.
    pub fn clipboard_text(&self) -> String {
        format!(
            "Subject: {}\n\n{}",
            self.response_subject, self.response_body
        )
    }
}

pub fn category_class(category: &str) -> String {
    format!("category-badge {}", category.to_lowercase())
}

pub fn priority_class(priority: &str) -> String {
    format!("priority-{}", priority.to_lowercase())
}

// =============================================================================
// Entrance animation
// =============================================================================

/// Visual state of the results panel at some point of its entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    /// 0.0 (invisible) to 1.0 (fully opaque).
    pub opacity: f32,

    /// Downward offset in points; reaches 0 when the entrance is done.
    pub offset: f32,

    pub finished: bool,
}

/// Entrance state `elapsed` after the panel was revealed.
///
/// The curve depends only on elapsed time since reveal, so repaints and
/// input in between never restart it.
pub fn entrance(elapsed: Duration) -> Entrance {
    let total = Duration::from_millis(RESULTS_ENTRANCE_MS).as_secs_f32();
    let t = (elapsed.as_secs_f32() / total).clamp(0.0, 1.0);
    // Ease-out cubic.
    let eased = 1.0 - (1.0 - t).powi(3);
    Entrance {
        opacity: eased,
        offset: RESULTS_ENTRANCE_OFFSET * (1.0 - eased),
        finished: t >= 1.0,
    }
}
