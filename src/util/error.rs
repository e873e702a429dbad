// MailTriage - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation.
// All errors preserve the causal chain for diagnostic logging.

use crate::util::constants;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all MailTriage operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum MailTriageError {
    /// User input was rejected before any request was made.
    Validation(ValidationError),

    /// Submitting the analysis request failed.
    Submit(SubmitError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for MailTriageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "Validation error: {e}"),
            Self::Submit(e) => write!(f, "Submission error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for MailTriageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Submit(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// Local, pre-network input rejections.
///
/// The `Display` text is shown verbatim in the error banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Trimmed text is shorter than the minimum.
    TooShort { chars: usize },

    /// Trimmed text is longer than the maximum.
    TooLong { chars: usize },

    /// File mode is active but nothing was selected.
    NoFile,

    /// Selected file exceeds the upload limit.
    TooLarge { size: u64 },

    /// Selected file extension is not accepted.
    UnsupportedType { extension: String },
}

impl ValidationError {
    /// Short machine-friendly tag, used in structured logs.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::TooShort { .. } => "too short",
            Self::TooLong { .. } => "too long",
            Self::NoFile => "no file",
            Self::TooLarge { .. } => "too large",
            Self::UnsupportedType { .. } => "unsupported type",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { .. } => write!(
                f,
                "Email text is too short. Please enter at least {} characters.",
                constants::MIN_TEXT_CHARS
            ),
            Self::TooLong { chars } => write!(
                f,
                "Email text is too long ({chars} characters). Maximum is {} characters.",
                constants::MAX_TEXT_CHARS
            ),
            Self::NoFile => write!(f, "No file selected. Please choose a file to upload."),
            Self::TooLarge { .. } => write!(
                f,
                "File is too large. Maximum size is {} MB.",
                constants::MAX_UPLOAD_BYTES / (1024 * 1024)
            ),
            Self::UnsupportedType { extension } => write!(
                f,
                "Unsupported type '.{extension}'. Use a .txt or .pdf file."
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for MailTriageError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

// ---------------------------------------------------------------------------
// Submission errors
// ---------------------------------------------------------------------------

/// Failures of a single analysis round trip.
#[derive(Debug)]
pub enum SubmitError {
    /// No response was received (connect refused, DNS, timeout).
    Network { source: reqwest::Error },

    /// The server answered with a failure status. `message` comes from the
    /// `error` field of the body, or a generic fallback.
    Server { status: u16, message: String },

    /// A success status whose body is not a valid analysis result.
    InvalidResponse { source: serde_json::Error },

    /// The JSON request body could not be encoded.
    Encode { source: serde_json::Error },

    /// The upload file could not be read at submission time.
    ReadFile { path: PathBuf, source: io::Error },

    /// The HTTP client itself could not be constructed.
    Client { source: reqwest::Error },
}

/// Coarse category used by the error presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input rejected before any request was made.
    Validation,
    /// No response received.
    Network,
    /// The server (or its response) reported a failure.
    Request,
    /// Desktop-side failures: clipboard, file access, startup config.
    Local,
}

impl SubmitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } => ErrorKind::Network,
            _ => ErrorKind::Request,
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network { .. } => {
                write!(f, "Connection error. Check your connection and try again.")
            }
            Self::Server { message, .. } => write!(f, "{message}"),
            Self::InvalidResponse { source } => {
                write!(f, "Invalid response from the analysis service: {source}")
            }
            Self::Encode { source } => write!(f, "Could not encode request: {source}"),
            Self::ReadFile { path, source } => {
                write!(f, "Could not read file '{}': {source}", path.display())
            }
            Self::Client { source } => write!(f, "Could not create HTTP client: {source}"),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network { source } => Some(source),
            Self::InvalidResponse { source } => Some(source),
            Self::Encode { source } => Some(source),
            Self::ReadFile { source, .. } => Some(source),
            Self::Client { source } => Some(source),
            Self::Server { .. } => None,
        }
    }
}

impl From<SubmitError> for MailTriageError {
    fn from(e: SubmitError) -> Self {
        Self::Submit(e)
    }
}

// ---------------------------------------------------------------------------
// Clipboard errors
// ---------------------------------------------------------------------------

/// The system clipboard refused the copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardError {
    pub reason: String,
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not copy to the clipboard: {}", self.reason)
    }
}

impl std::error::Error for ClipboardError {}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for MailTriageError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for MailTriage results.
pub type Result<T> = std::result::Result<T, MailTriageError>;
