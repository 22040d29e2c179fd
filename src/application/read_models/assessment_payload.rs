//! Page-embedded assessment payload
//!
//! The payload is untrusted and may be empty, truncated, or partially
//! ill-typed. Parsing never fails outright: unreadable input becomes an
//! empty payload and individual bad records are dropped.

use crate::assessment::domain::{AssessmentRun, StatusSummary};
use serde::Deserialize;
use serde_json::Value;

/// Payload shape: `{ sbom_id, status_summary, latest_runs, all_runs }`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentPayload {
    pub sbom_id: String,
    /// Server-computed summary, when the payload carried one
    pub status_summary: Option<StatusSummary>,
    /// Most recent run per plugin
    pub latest_runs: Vec<AssessmentRun>,
    /// Full run history, newest first
    pub all_runs: Vec<AssessmentRun>,
    /// Run records that were not JSON objects and could not be read
    pub skipped_records: usize,
}

#[derive(Deserialize)]
struct RawPayload {
    #[serde(default)]
    sbom_id: Value,
    #[serde(default)]
    status_summary: Value,
    #[serde(default)]
    latest_runs: Value,
    #[serde(default)]
    all_runs: Value,
}

/// Why a payload degraded to empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadIssue {
    Empty,
    InvalidJson(String),
    NotAnObject,
}

impl std::fmt::Display for PayloadIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadIssue::Empty => write!(f, "payload is empty"),
            PayloadIssue::InvalidJson(details) => write!(f, "payload is not valid JSON: {}", details),
            PayloadIssue::NotAnObject => write!(f, "payload is not a JSON object"),
        }
    }
}

impl AssessmentPayload {
    /// Parses a payload, reporting why it degraded when it could not be read.
    ///
    /// The returned payload is always usable; the issue is informational.
    pub fn parse(content: &str) -> (Self, Option<PayloadIssue>) {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return (Self::default(), Some(PayloadIssue::Empty));
        }

        let value: Value = match serde_json::from_str(trimmed) {
            Ok(value) => value,
            Err(e) => return (Self::default(), Some(PayloadIssue::InvalidJson(e.to_string()))),
        };

        if !value.is_object() {
            return (Self::default(), Some(PayloadIssue::NotAnObject));
        }

        match serde_json::from_value::<RawPayload>(value) {
            Ok(raw) => (Self::from_raw(raw), None),
            Err(_) => (Self::default(), Some(PayloadIssue::NotAnObject)),
        }
    }

    /// Parses a payload, silently falling back to an empty one
    pub fn from_json_lenient(content: &str) -> Self {
        Self::parse(content).0
    }

    fn from_raw(raw: RawPayload) -> Self {
        let sbom_id = match raw.sbom_id {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        };

        // a summary without a status string cannot drive the badge
        let has_status = raw
            .status_summary
            .get("overall_status")
            .is_some_and(Value::is_string);
        let status_summary = if has_status {
            serde_json::from_value(raw.status_summary).ok()
        } else {
            None
        };

        let (latest_runs, skipped_latest) = Self::parse_runs(raw.latest_runs);
        let (all_runs, skipped_all) = Self::parse_runs(raw.all_runs);

        Self {
            sbom_id,
            status_summary,
            latest_runs,
            all_runs,
            skipped_records: skipped_latest + skipped_all,
        }
    }

    fn parse_runs(value: Value) -> (Vec<AssessmentRun>, usize) {
        let Value::Array(entries) = value else {
            return (Vec::new(), 0);
        };
        let total = entries.len();
        let runs: Vec<AssessmentRun> = entries
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect();
        let skipped = total - runs.len();
        (runs, skipped)
    }
}
