use crate::application::read_models::{AssessmentReadModel, PayloadIssue};

/// AssessmentResponse - response DTO from the summarize use case
#[derive(Debug, Clone)]
pub struct AssessmentResponse {
    pub read_model: AssessmentReadModel,
    /// Set when the payload could not be read and an empty one was used
    pub payload_issue: Option<PayloadIssue>,
}

impl AssessmentResponse {
    pub fn new(read_model: AssessmentReadModel, payload_issue: Option<PayloadIssue>) -> Self {
        Self {
            read_model,
            payload_issue,
        }
    }
}
