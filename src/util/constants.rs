// MailTriage - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "MailTriage";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "MailTriage";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Input validation limits
// =============================================================================

/// Minimum trimmed email text length, in characters.
pub const MIN_TEXT_CHARS: usize = 3;

/// Maximum trimmed email text length, in characters.
pub const MAX_TEXT_CHARS: usize = 10_000;

/// Maximum upload size in bytes. Files of exactly this size are accepted.
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024; // 16 MiB

/// Accepted upload extensions (lower-case, without the dot).
pub const ALLOWED_EXTENSIONS: &[&str] = &["txt", "pdf"];

// =============================================================================
// Character counter thresholds
// =============================================================================

/// Above this many characters the counter turns amber.
pub const CHAR_COUNT_WARN: usize = 2_000;

/// Above this many characters the counter turns red.
pub const CHAR_COUNT_ALERT: usize = 5_000;

// =============================================================================
// Timers
// =============================================================================

/// How long an error banner stays visible before it is removed (ms).
pub const ERROR_BANNER_TIMEOUT_MS: u64 = 5_000;

/// How long the "copied" glyph replaces the copy icon (ms).
pub const COPY_FEEDBACK_MS: u64 = 2_000;

/// Duration of the results panel entrance animation (ms).
pub const RESULTS_ENTRANCE_MS: u64 = 500;

/// Vertical offset the results panel slides in from (points).
pub const RESULTS_ENTRANCE_OFFSET: f32 = 20.0;

// =============================================================================
// Server
// =============================================================================

/// Default analysis endpoint (the Flask backend's development address).
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/analyze";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimum user-configurable request timeout in seconds.
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum user-configurable request timeout in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Multipart field name the backend reads the upload from.
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Confidence shown when the server omits the field.
pub const DEFAULT_CONFIDENCE: &str = "Média";

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
