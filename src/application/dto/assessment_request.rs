use std::path::PathBuf;

/// AssessmentRequest - request DTO for the summarize use case
#[derive(Debug, Clone)]
pub struct AssessmentRequest {
    /// Path to the payload JSON file
    pub payload_path: PathBuf,
    /// Whether the viewer's plan includes assessments
    pub is_available: bool,
    /// Component owning the SBOM; enables detail URLs
    pub component_id: Option<String>,
    /// Prefix for detail URLs
    pub base_url: Option<String>,
    /// Plugin exclusion patterns (`*` wildcard)
    pub exclude_plugins: Vec<String>,
}

impl AssessmentRequest {
    pub fn new(payload_path: PathBuf) -> Self {
        Self {
            payload_path,
            is_available: true,
            component_id: None,
            base_url: None,
            exclude_plugins: Vec::new(),
        }
    }

    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    pub fn with_component_id(mut self, component_id: Option<String>) -> Self {
        self.component_id = component_id;
        self
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_exclude_plugins(mut self, exclude_plugins: Vec<String>) -> Self {
        self.exclude_plugins = exclude_plugins;
        self
    }
}
