// MailTriage - platform/fs.rs
//
// Filesystem helpers for the upload panel. Only metadata is read at
// selection time; the transport reads the bytes when sending.

use crate::core::model::SelectedFile;
use std::io;
use std::path::Path;

/// Build a `SelectedFile` descriptor from a path chosen in the file dialog.
///
/// Fails if the path cannot be stat'ed or is not a regular file.
pub fn describe_file(path: &Path) -> io::Result<SelectedFile> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' is not a regular file", path.display()),
        ));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    tracing::debug!(file = %name, size = metadata.len(), "File described");

    Ok(SelectedFile {
        name,
        size: metadata.len(),
        path: path.to_path_buf(),
    })
}
