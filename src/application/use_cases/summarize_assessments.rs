use crate::application::dto::{AssessmentRequest, AssessmentResponse};
use crate::application::read_models::{
    AssessmentPayload, AssessmentReadModelBuilder, ReadModelOptions,
};
use crate::assessment::services::PluginFilter;
use crate::ports::inbound::AssessmentSummaryPort;
use crate::ports::outbound::{PayloadReader, ProgressReporter};
use crate::shared::error::AssessError;
use crate::shared::Result;

/// SummarizeAssessmentsUseCase - reads one SBOM's payload and builds its read model
///
/// # Type Parameters
/// * `R` - PayloadReader implementation
/// * `P` - ProgressReporter implementation
pub struct SummarizeAssessmentsUseCase<R, P> {
    payload_reader: R,
    progress_reporter: P,
}

impl<R, P> SummarizeAssessmentsUseCase<R, P>
where
    R: PayloadReader,
    P: ProgressReporter,
{
    pub fn new(payload_reader: R, progress_reporter: P) -> Self {
        Self {
            payload_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Returns an error if the payload file cannot be read, the component id
    /// is blank, or an exclusion pattern is invalid. Bad payload *content*
    /// only produces warnings.
    pub fn execute(&self, request: AssessmentRequest) -> Result<AssessmentResponse> {
        if let Some(component_id) = request.component_id.as_deref() {
            if component_id.trim().is_empty() {
                return Err(AssessError::Validation {
                    message: "Component id must not be empty".to_string(),
                }
                .into());
            }
        }
        let plugin_filter = PluginFilter::new(request.exclude_plugins.clone())?;

        self.progress_reporter.report(&format!(
            "📄 Reading assessment payload: {}",
            request.payload_path.display()
        ));
        let content = self.payload_reader.read_payload(&request.payload_path)?;

        let (payload, payload_issue) = AssessmentPayload::parse(&content);
        if let Some(issue) = &payload_issue {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: {}; showing an empty summary.",
                issue
            ));
        }
        if payload.skipped_records > 0 {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: Skipped {} unreadable run record(s).",
                payload.skipped_records
            ));
        }

        let options = ReadModelOptions {
            is_available: request.is_available,
            component_id: request.component_id.as_deref(),
            base_url: request.base_url.as_deref(),
            plugin_filter: Some(&plugin_filter),
        };
        let read_model = AssessmentReadModelBuilder::build(payload, &options);

        for pattern in plugin_filter.unmatched_patterns() {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: Exclusion pattern '{}' did not match any plugin.",
                pattern
            ));
        }
        if read_model.summary_mismatch {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: Payload summary ({}) disagrees with its runs ({}); showing the payload summary.",
                read_model.summary.overall_status, read_model.recomputed_summary.overall_status
            ));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Overall status: {} ({})",
            read_model.summary.overall_status, read_model.badge.text
        ));

        Ok(AssessmentResponse::new(read_model, payload_issue))
    }
}

impl<R, P> AssessmentSummaryPort for SummarizeAssessmentsUseCase<R, P>
where
    R: PayloadReader,
    P: ProgressReporter,
{
    fn summarize(&self, request: AssessmentRequest) -> Result<AssessmentResponse> {
        self.execute(request)
    }
}
