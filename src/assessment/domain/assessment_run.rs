use super::finding::{Finding, FindingSummary};
use super::lenient;
use super::run_outcome::RunOutcome;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Why a run was scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunReason {
    #[default]
    OnUpload,
    Manual,
    Scheduled,
    ConfigChange,
    Migration,
}

impl RunReason {
    /// Human-readable label shown next to a run
    pub fn label(&self) -> &'static str {
        match self {
            RunReason::OnUpload => "On upload",
            RunReason::Manual => "Manual",
            RunReason::Scheduled => "Scheduled",
            RunReason::ConfigChange => "Config change",
            RunReason::Migration => "Migration",
        }
    }
}

/// Lifecycle state of a run: pending -> running -> completed | failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    #[default]
    Pending,
    Running,
    Completed,
    Failed,
}

impl RunStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStatus::Completed | RunStatus::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Pending => "pending",
            RunStatus::Running => "running",
            RunStatus::Completed => "completed",
            RunStatus::Failed => "failed",
        }
    }
}

/// Result document attached to a completed run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub summary: FindingSummary,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub findings: Vec<Finding>,
}

/// One execution of one plugin against one SBOM.
///
/// Every field is parsed leniently: an ill-typed field takes its default and
/// the rest of the record survives. `result` is kept raw and parsed on demand
/// so that an unparseable result can be classified instead of rejected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssessmentRun {
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub sbom_id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub plugin_name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub plugin_display_name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub run_reason: RunReason,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: RunStatus,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub created_at: Option<DateTime<Utc>>,
}

impl AssessmentRun {
    /// Display name, falling back to the plugin identifier
    pub fn display_name(&self) -> &str {
        if self.plugin_display_name.trim().is_empty() {
            &self.plugin_name
        } else {
            &self.plugin_display_name
        }
    }

    /// Parses the attached result, if any.
    ///
    /// Returns `None` when no result is attached or it does not have the
    /// expected shape.
    pub fn parsed_result(&self) -> Option<AssessmentResult> {
        let raw = self.result.as_ref()?;
        serde_json::from_value(raw.clone()).ok()
    }

    /// Classifies the run for counting.
    ///
    /// - `pending` / `running` -> Pending
    /// - `failed` (infrastructure failure) -> Failed
    /// - `completed` with fail or error findings -> Failed, otherwise Passed
    /// - `completed` without a parseable result -> Pending, never Passed
    pub fn outcome(&self) -> RunOutcome {
        match self.status {
            RunStatus::Pending | RunStatus::Running => RunOutcome::Pending,
            RunStatus::Failed => RunOutcome::Failed,
            RunStatus::Completed => match self.parsed_result() {
                Some(result) if result.summary.has_failures() => RunOutcome::Failed,
                Some(_) => RunOutcome::Passed,
                None => RunOutcome::Pending,
            },
        }
    }

    /// Finding summary of a completed run with a parseable result
    pub fn finding_summary(&self) -> Option<FindingSummary> {
        if self.status != RunStatus::Completed {
            return None;
        }
        self.parsed_result().map(|r| r.summary)
    }

    /// Wall-clock time between start and completion
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) if end >= start => Some(end - start),
            _ => None,
        }
    }
}
