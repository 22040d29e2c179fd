//! Assessment read model for query operations

use super::run_view::RunView;
use crate::application::presenters::BadgeView;
use crate::assessment::domain::{OverallStatus, StatusSummary};
use serde::Serialize;

/// Where the displayed summary came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummarySource {
    /// The server-computed `status_summary` in the payload
    Payload,
    /// Recomputed from `latest_runs`
    Recomputed,
}

/// View representation of report metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMetadataView {
    pub report_id: String,
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
}

/// Latest runs grouped by outcome; failed first
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutcomeGroupsView {
    pub failed: Vec<RunView>,
    pub passed: Vec<RunView>,
    pub pending: Vec<RunView>,
}

impl OutcomeGroupsView {
    pub fn iter(&self) -> impl Iterator<Item = &RunView> {
        self.failed
            .iter()
            .chain(self.passed.iter())
            .chain(self.pending.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.failed.is_empty() && self.passed.is_empty() && self.pending.is_empty()
    }
}

/// Main read model for one SBOM's assessments
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReadModel {
    pub metadata: ReportMetadataView,
    pub sbom_id: String,
    /// Whether the viewer's plan includes assessments
    pub is_available: bool,
    /// Summary driving the badge
    pub summary: StatusSummary,
    pub summary_source: SummarySource,
    /// Summary recomputed from the latest runs, kept for comparison
    pub recomputed_summary: StatusSummary,
    /// True when the payload summary disagrees with its own runs
    pub summary_mismatch: bool,
    pub badge: BadgeView,
    pub results: OutcomeGroupsView,
    /// Full run history in payload order
    pub history: Vec<RunView>,
    /// Link to the results section, when the component is known
    pub results_url: Option<String>,
    /// Run records dropped because they were unreadable
    pub skipped_records: usize,
}

impl AssessmentReadModel {
    pub fn overall_status(&self) -> OverallStatus {
        self.summary.overall_status
    }

    pub fn has_failures(&self) -> bool {
        self.summary.overall_status == OverallStatus::HasFailures
    }

    /// Plugin names with a detail panel, in display order
    pub fn plugin_names(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.plugin_name.as_str()).collect()
    }
}
