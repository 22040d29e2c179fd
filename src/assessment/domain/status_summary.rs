use super::lenient;
use super::overall_status::OverallStatus;
use serde::{Deserialize, Serialize};

/// Derived roll-up for one SBOM. Never stored; rebuilt per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusSummary {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub overall_status: OverallStatus,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_assessments: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub passing_count: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub failing_count: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub pending_count: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub in_progress_count: u32,
}

impl StatusSummary {
    /// Pending and in-progress runs merged, as shown to the viewer
    pub fn display_pending_count(&self) -> u32 {
        self.pending_count.saturating_add(self.in_progress_count)
    }

    /// passing + failing + pending (merged) == total
    pub fn is_consistent(&self) -> bool {
        let counted = self
            .passing_count
            .saturating_add(self.failing_count)
            .saturating_add(self.display_pending_count());
        counted == self.total_assessments
    }

    pub fn is_empty(&self) -> bool {
        self.total_assessments == 0
    }

    /// An empty summary seen by a viewer without the feature is
    /// `no_plugins_enabled`, whatever the payload recorded.
    pub fn for_viewer(self, is_available: bool) -> Self {
        if !is_available && self.is_empty() {
            Self {
                overall_status: OverallStatus::NoPluginsEnabled,
                ..self
            }
        } else {
            self
        }
    }
}
