//! Read models for CQRS-lite pattern
//!
//! The payload is parsed once and flattened into a view-optimized model
//! that both formatters and the CLI consume.

mod assessment_payload;
mod assessment_read_model;
mod assessment_read_model_builder;
mod run_view;

pub use assessment_payload::{AssessmentPayload, PayloadIssue};
pub use assessment_read_model::{
    AssessmentReadModel, OutcomeGroupsView, ReportMetadataView, SummarySource,
};
pub use assessment_read_model_builder::{AssessmentReadModelBuilder, ReadModelOptions};
pub use run_view::RunView;
