use sbom_assess::prelude::*;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Mock PayloadReader for testing
pub struct MockPayloadReader {
    pub content: String,
    pub should_fail: bool,
    pub requested_paths: RefCell<Vec<PathBuf>>,
}

impl MockPayloadReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
            requested_paths: RefCell::new(Vec::new()),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }
}

impl PayloadReader for MockPayloadReader {
    fn read_payload(&self, path: &Path) -> Result<String> {
        self.requested_paths.borrow_mut().push(path.to_path_buf());
        if self.should_fail {
            anyhow::bail!("Mock payload read failure");
        }
        Ok(self.content.clone())
    }
}
