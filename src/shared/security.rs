use crate::shared::error::AssessError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum payload size (10 MB). Page-embedded payloads are a few KB;
/// anything this large is not an assessment export.
pub const MAX_PAYLOAD_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link, not a regular file,
/// or its metadata cannot be read
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| AssessError::PayloadReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(AssessError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Symbolic links are not followed. Pass the real file path instead.".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(AssessError::InvalidPayloadPath {
            path: path.to_path_buf(),
            reason: format!("{} is not a regular file", file_description),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, MAX_PAYLOAD_SIZE)
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(AssessError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Export only the assessment payload for a single SBOM".to_string(),
        }
        .into());
    }
    Ok(())
}
