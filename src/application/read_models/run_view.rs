//! Flattened view of one assessment run

use crate::assessment::domain::{Finding, FindingSummary, RunOutcome, RunStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// View representation of an assessment run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunView {
    pub id: String,
    pub plugin_name: String,
    pub display_name: String,
    pub category: String,
    /// Human-readable run reason ("On upload", "Manual", ...)
    pub run_reason: &'static str,
    pub status: RunStatus,
    pub outcome: RunOutcome,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub duration_seconds: Option<i64>,
    pub error_message: Option<String>,
    pub finding_summary: Option<FindingSummary>,
    pub findings: Vec<Finding>,
    /// `#plugin-<name>` fragment of the detail panel
    pub anchor: String,
    /// Absolute or site-relative link to the detail panel, when the component is known
    pub detail_url: Option<String>,
}
