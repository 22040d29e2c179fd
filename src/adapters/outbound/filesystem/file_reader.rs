use crate::ports::outbound::PayloadReader;
use crate::shared::error::AssessError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading assessment payloads from disk
///
/// Rejects symbolic links, non-regular files, and oversized files
/// before reading.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadReader for FileSystemReader {
    fn read_payload(&self, path: &Path) -> Result<String> {
        if fs::symlink_metadata(path).is_err() {
            return Err(AssessError::PayloadNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "No file at \"{}\".\n   \
                     Export the assessment JSON from the SBOM detail page, or specify the correct path with the --path option.",
                    path.display()
                ),
            }
            .into());
        }

        validate_regular_file(path, "assessment payload")?;

        fs::read_to_string(path).map_err(|e| {
            AssessError::PayloadReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_read_payload_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("assessment.json");
        fs::write(&path, r#"{"sbom_id": "s1"}"#).unwrap();

        let content = FileSystemReader::new().read_payload(&path).unwrap();
        assert_eq!(content, r#"{"sbom_id": "s1"}"#);
    }

    #[test]
    fn test_read_payload_not_found() {
        let path = PathBuf::from("/nonexistent/assessment.json");
        let err = FileSystemReader::new().read_payload(&path).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Assessment payload not found"));
        assert!(message.contains("--path"));
    }

    #[test]
    fn test_read_payload_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = FileSystemReader::default()
            .read_payload(temp_dir.path())
            .unwrap_err();
        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_read_empty_payload_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.json");
        fs::write(&path, "").unwrap();

        let content = FileSystemReader::new().read_payload(&path).unwrap();
        assert!(content.is_empty());
    }
}
