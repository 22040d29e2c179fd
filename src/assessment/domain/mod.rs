pub mod assessment_run;
pub mod finding;
mod lenient;
pub mod overall_status;
pub mod run_outcome;
pub mod status_summary;

pub use assessment_run::{AssessmentResult, AssessmentRun, RunReason, RunStatus};
pub use finding::{Finding, FindingStatus, FindingSummary};
pub use overall_status::OverallStatus;
pub use run_outcome::RunOutcome;
pub use status_summary::StatusSummary;
