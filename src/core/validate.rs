// MailTriage - core/validate.rs
//
// Input validation run before every submission. A failure blocks the
// request entirely: no network call is made.

use crate::core::model::{InputMode, SelectedFile};
use crate::util::constants::{
    ALLOWED_EXTENSIONS, MAX_TEXT_CHARS, MAX_UPLOAD_BYTES, MIN_TEXT_CHARS,
};
use crate::util::error::ValidationError;

/// Validate the active input.
///
/// `text` is the raw contents of the text panel and `file` the current
/// selection of the upload panel; only the one matching `mode` is checked.
pub fn validate(
    mode: InputMode,
    text: &str,
    file: Option<&SelectedFile>,
) -> Result<(), ValidationError> {
    match mode {
        InputMode::TextDirect => validate_text(text),
        InputMode::FileUpload => validate_file(file),
    }
}

/// Trimmed length must be within [MIN_TEXT_CHARS, MAX_TEXT_CHARS].
pub fn validate_text(text: &str) -> Result<(), ValidationError> {
    let chars = text.trim().chars().count();
    if chars < MIN_TEXT_CHARS {
        return Err(ValidationError::TooShort { chars });
    }
    if chars > MAX_TEXT_CHARS {
        return Err(ValidationError::TooLong { chars });
    }
    Ok(())
}

/// A file must be selected, be no larger than MAX_UPLOAD_BYTES and carry
/// one of the allowed extensions.
pub fn validate_file(file: Option<&SelectedFile>) -> Result<(), ValidationError> {
    let file = file.ok_or(ValidationError::NoFile)?;

    if file.size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge { size: file.size });
    }

    let extension = extension_of(&file.name);
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ValidationError::UnsupportedType { extension });
    }
    Ok(())
}

/// Lower-cased text after the last '.', or the whole name when there is
/// no dot (which never matches an allowed extension).
pub fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// Live hint for the text box border, computed on the raw (untrimmed) text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextValidity {
    Empty,
    Valid,
    Invalid,
}

pub fn text_validity(text: &str) -> TextValidity {
    let chars = text.chars().count();
    if chars == 0 {
        TextValidity::Empty
    } else if (MIN_TEXT_CHARS..=MAX_TEXT_CHARS).contains(&chars) {
        TextValidity::Valid
    } else {
        TextValidity::Invalid
    }
}
