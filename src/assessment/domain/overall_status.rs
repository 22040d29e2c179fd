use serde::{Deserialize, Serialize};
use std::fmt;

/// Rolled-up status of every run for one SBOM.
///
/// `NoAssessments` and `NoPluginsEnabled` render identically but stay distinct
/// so reports can tell "not run yet" from "not entitled".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    AllPass,
    HasFailures,
    Pending,
    InProgress,
    #[default]
    NoAssessments,
    NoPluginsEnabled,
    /// Any value this version does not recognise
    #[serde(other)]
    Unknown,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::AllPass => "all_pass",
            OverallStatus::HasFailures => "has_failures",
            OverallStatus::Pending => "pending",
            OverallStatus::InProgress => "in_progress",
            OverallStatus::NoAssessments => "no_assessments",
            OverallStatus::NoPluginsEnabled => "no_plugins_enabled",
            OverallStatus::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != OverallStatus::Unknown
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
