/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod assessment_request;
mod assessment_response;
mod output_format;
mod panel_expansion;

pub use assessment_request::AssessmentRequest;
pub use assessment_response::AssessmentResponse;
pub use output_format::OutputFormat;
pub use panel_expansion::PanelExpansion;
