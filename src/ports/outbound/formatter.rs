use crate::application::read_models::AssessmentReadModel;
use crate::shared::Result;

/// AssessmentFormatter port for rendering an assessment report
///
/// Implementations exist for JSON and Markdown.
pub trait AssessmentFormatter {
    /// Renders the read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &AssessmentReadModel) -> Result<String>;
}
