// MailTriage - app/banner.rs
//
// Error presenter: at most one inline error banner. A new error replaces
// the current one and restarts its timer. No history is kept.
//
// Time is passed in by the caller so expiry is deterministic under test.

use crate::util::constants::ERROR_BANNER_TIMEOUT_MS;
use crate::util::error::ErrorKind;
use std::time::{Duration, Instant};

/// The banner currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub message: String,
    pub kind: ErrorKind,
    shown_at: Instant,
}

/// Holds zero or one `ErrorBanner`.
#[derive(Debug, Default)]
pub struct ErrorPresenter {
    current: Option<ErrorBanner>,
}

impl ErrorPresenter {
    fn timeout() -> Duration {
        Duration::from_millis(ERROR_BANNER_TIMEOUT_MS)
    }

    /// Show `message`, replacing any banner already visible.
    pub fn show(&mut self, kind: ErrorKind, message: impl Into<String>, now: Instant) {
        let message = message.into();
        tracing::info!(kind = ?kind, message = %message, "Error banner shown");
        self.current = Some(ErrorBanner {
            message,
            kind,
            shown_at: now,
        });
    }

    pub fn current(&self) -> Option<&ErrorBanner> {
        self.current.as_ref()
    }

    /// Remove the banner (close control or Escape). Returns true if one was visible.
    pub fn dismiss(&mut self) -> bool {
        let had = self.current.take().is_some();
        if had {
            tracing::debug!("Error banner dismissed");
        }
        had
    }

    /// Drop the banner once its timeout has elapsed. Returns true if it expired.
    pub fn tick(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|b| now.saturating_duration_since(b.shown_at) >= Self::timeout());
        if expired {
            self.current = None;
            tracing::debug!("Error banner expired");
        }
        expired
    }

    /// Time left before the visible banner expires, for repaint scheduling.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.current
            .as_ref()
            .map(|b| Self::timeout().saturating_sub(now.saturating_duration_since(b.shown_at)))
    }
}
