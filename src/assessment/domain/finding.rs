use super::lenient;
use serde::{Deserialize, Serialize};

/// Outcome of a single check performed by a plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingStatus {
    Pass,
    Fail,
    Warning,
    #[default]
    Info,
    Error,
}

impl FindingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingStatus::Pass => "pass",
            FindingStatus::Fail => "fail",
            FindingStatus::Warning => "warning",
            FindingStatus::Info => "info",
            FindingStatus::Error => "error",
        }
    }
}

/// A single pass/fail/warning/info/error item produced by a plugin
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Finding {
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: FindingStatus,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub severity: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub remediation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Finding {
    /// Names listed under `metadata.packages` (or `metadata.components`),
    /// used by the expandable package list under a finding.
    pub fn affected_packages(&self) -> Vec<&str> {
        let Some(metadata) = self.metadata.as_ref() else {
            return Vec::new();
        };
        ["packages", "components"]
            .iter()
            .filter_map(|key| metadata.get(*key).and_then(|v| v.as_array()))
            .flatten()
            .filter_map(|entry| {
                entry
                    .as_str()
                    .or_else(|| entry.get("name").and_then(|n| n.as_str()))
            })
            .collect()
    }
}

/// Per-status finding counts reported by a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FindingSummary {
    #[serde(default, alias = "total", deserialize_with = "lenient::count")]
    pub total_findings: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub pass_count: u32,
    #[serde(default, deserialize_with = "lenient::strict_count")]
    pub fail_count: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub warning_count: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub info_count: u32,
    #[serde(default, deserialize_with = "lenient::strict_count")]
    pub error_count: u32,
}

impl FindingSummary {
    /// A run whose findings include any fail or error counts as failing.
    pub fn has_failures(&self) -> bool {
        self.fail_count > 0 || self.error_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_summary_has_failures() {
        let mut summary = FindingSummary::default();
        assert!(!summary.has_failures());

        summary.warning_count = 3;
        assert!(!summary.has_failures());

        summary.error_count = 1;
        assert!(summary.has_failures());

        let summary = FindingSummary {
            fail_count: 2,
            ..Default::default()
        };
        assert!(summary.has_failures());
    }

    #[test]
    fn test_finding_summary_accepts_total_alias() {
        let summary: FindingSummary =
            serde_json::from_str(r#"{"total": 4, "pass_count": 4}"#).unwrap();
        assert_eq!(summary.total_findings, 4);
        assert_eq!(summary.pass_count, 4);
    }

    #[test]
    fn test_finding_unknown_status_defaults_to_info() {
        let finding: Finding =
            serde_json::from_str(r#"{"id": "f1", "title": "x", "status": "bogus"}"#).unwrap();
        assert_eq!(finding.status, FindingStatus::Info);
    }

    #[test]
    fn test_finding_affected_packages() {
        let finding: Finding = serde_json::from_str(
            r#"{"id": "f1", "status": "fail",
                "metadata": {"packages": ["requests", {"name": "urllib3"}, 5]}}"#,
        )
        .unwrap();
        assert_eq!(finding.affected_packages(), vec!["requests", "urllib3"]);
    }

    #[test]
    fn test_finding_without_metadata_has_no_packages() {
        let finding = Finding::default();
        assert!(finding.affected_packages().is_empty());
    }
}
