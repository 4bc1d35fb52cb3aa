//! Local document intake: type and size checks applied when a file is picked.

use std::path::Path;

use crate::{
    error::{IntakeError, IoResultExt, Result},
    models::DocumentEntry,
};

/// Largest accepted document, 10 MiB.
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted extensions and their MIME types.
const ACCEPTED_TYPES: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
];

/// MIME type for an accepted file extension.
pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    ACCEPTED_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
}

/// Checks a candidate document against the intake rules.
pub fn check_document(name: &str, byte_size: u64, mime_type: Option<&str>) -> Result<()> {
    if mime_type.is_none() {
        return Err(IntakeError::invalid_input("documents")
            .with_reason(format!("{name}: only PDF, PNG, JPEG and Word files are accepted")));
    }
    if byte_size == 0 {
        return Err(IntakeError::invalid_input("documents").with_reason(format!("{name} is empty")));
    }
    if byte_size > MAX_DOCUMENT_BYTES {
        return Err(IntakeError::invalid_input("documents")
            .with_reason(format!("{name} exceeds the 10 MB limit")));
    }
    Ok(())
}

impl DocumentEntry {
    /// Builds an entry from a local file, reading only its metadata.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).fs_context(path)?;
        if !metadata.is_file() {
            return Err(IntakeError::invalid_input("documents")
                .with_reason(format!("{} is not a file", path.display())));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = mime_type_for(path);
        check_document(&name, metadata.len(), mime_type)?;

        let local_handle = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        Ok(Self {
            name,
            byte_size: metadata.len(),
            mime_type: mime_type.unwrap_or_default().to_string(),
            local_handle,
        })
    }
}
