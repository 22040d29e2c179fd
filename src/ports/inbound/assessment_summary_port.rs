use crate::application::dto::{AssessmentRequest, AssessmentResponse};
use crate::shared::Result;

/// AssessmentSummaryPort - Inbound port for summarizing one SBOM's assessments
///
/// External adapters (CLI, tests) drive the application through this port.
pub trait AssessmentSummaryPort {
    /// Reads the payload named by the request and builds the read model
    ///
    /// # Errors
    /// Returns an error only when the payload file cannot be read or the
    /// request is invalid. Unparseable payload content is not an error.
    fn summarize(&self, request: AssessmentRequest) -> Result<AssessmentResponse>;
}
