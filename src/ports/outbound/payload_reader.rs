use crate::shared::Result;
use std::path::Path;

/// PayloadReader port for loading the raw assessment payload
pub trait PayloadReader {
    /// Reads the payload file as text, without interpreting it
    ///
    /// # Errors
    /// Returns an error if the file is missing, unsafe to read, or unreadable
    fn read_payload(&self, path: &Path) -> Result<String>;
}
