//! sbom-assess - status roll-up for SBOM plugin assessments
//!
//! This library turns the assessment runs recorded for one SBOM into a single
//! overall status, a status badge, and a report whose plugin sections can be
//! navigated by `#plugin-<name>` anchors.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`assessment`): Runs, findings, status precedence, aggregation
//! - **Application Layer** (`application`): Use cases, read models, badge presenter, navigation
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_assess::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = SummarizeAssessmentsUseCase::new(
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = AssessmentRequest::new(PathBuf::from("assessment.json"));
//! let response = use_case.execute(request)?;
//!
//! let formatter = FormatterFactory::create(OutputFormat::Markdown, PanelExpansion::All);
//! println!("{}", formatter.format(&response.read_model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod assessment;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonReportFormatter, MarkdownReportFormatter,
    };
    pub use crate::adapters::outbound::navigation::{InMemoryLocation, ReportPanelState};
    pub use crate::application::dto::{
        AssessmentRequest, AssessmentResponse, OutputFormat, PanelExpansion,
    };
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::navigation::{AttachedNavigator, DetailNavigator};
    pub use crate::application::presenters::{BadgePresenter, BadgeState};
    pub use crate::application::read_models::{AssessmentPayload, AssessmentReadModel};
    pub use crate::application::use_cases::SummarizeAssessmentsUseCase;
    pub use crate::assessment::domain::{AssessmentRun, OverallStatus, RunOutcome, StatusSummary};
    pub use crate::assessment::services::StatusAggregator;
    pub use crate::ports::inbound::AssessmentSummaryPort;
    pub use crate::ports::outbound::{
        AssessmentFormatter, DetailPanelView, HashChangeSource, OutputPresenter, PayloadReader,
        ProgressReporter,
    };
    pub use crate::shared::Result;
}
