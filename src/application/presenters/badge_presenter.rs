use crate::assessment::domain::{OverallStatus, StatusSummary};
use serde::Serialize;

/// Visual state of the badge.
///
/// `Locked -> NoResults -> Processing -> AllPass | HasFailures`; a new run
/// moves a terminal badge back to `Processing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeState {
    Locked,
    NoResults,
    Processing,
    AllPass,
    HasFailures,
}

/// Everything a view layer needs to render the badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeView {
    pub state: BadgeState,
    pub css_class: &'static str,
    pub icon: &'static str,
    pub text: String,
    pub tooltip: String,
    pub clickable: bool,
}

/// BadgePresenter maps an aggregated status to badge attributes.
///
/// Every method is a total function of the inputs. Statuses this version does
/// not recognise render as the neutral "no results" badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgePresenter {
    overall_status: OverallStatus,
    is_available: bool,
    total: u32,
    passing: u32,
    failing: u32,
    pending: u32,
}

impl BadgePresenter {
    pub fn new(summary: &StatusSummary, is_available: bool) -> Self {
        Self {
            overall_status: summary.overall_status,
            is_available,
            total: summary.total_assessments,
            passing: summary.passing_count,
            failing: summary.failing_count,
            pending: summary.display_pending_count(),
        }
    }

    pub fn state(&self) -> BadgeState {
        if !self.is_available && self.total == 0 {
            return BadgeState::Locked;
        }
        match self.overall_status {
            OverallStatus::AllPass => BadgeState::AllPass,
            OverallStatus::HasFailures => BadgeState::HasFailures,
            OverallStatus::Pending | OverallStatus::InProgress => BadgeState::Processing,
            OverallStatus::NoAssessments
            | OverallStatus::NoPluginsEnabled
            | OverallStatus::Unknown => BadgeState::NoResults,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self.state() {
            BadgeState::AllPass => "success",
            BadgeState::HasFailures => "warning",
            BadgeState::Processing => "info animated",
            BadgeState::NoResults => "secondary",
            BadgeState::Locked => "secondary locked",
        }
    }

    pub fn badge_icon(&self) -> &'static str {
        match self.state() {
            BadgeState::AllPass => "fas fa-check-circle",
            BadgeState::HasFailures => "fas fa-exclamation-triangle",
            BadgeState::Processing => "fas fa-spinner fa-spin",
            BadgeState::NoResults => "fas fa-minus-circle",
            BadgeState::Locked => "fas fa-lock",
        }
    }

    pub fn badge_text(&self) -> String {
        match self.state() {
            BadgeState::AllPass => counted_label(self.passing, "Passed"),
            BadgeState::HasFailures => counted_label(self.failing, "Failed"),
            BadgeState::Processing if self.overall_status == OverallStatus::Pending => {
                "Pending".to_string()
            }
            BadgeState::Processing => "Processing".to_string(),
            BadgeState::NoResults => "No Results".to_string(),
            BadgeState::Locked => "Upgrade".to_string(),
        }
    }

    pub fn tooltip_text(&self) -> String {
        match self.state() {
            BadgeState::AllPass => format!("{} passed", pluralize(self.passing, "assessment")),
            BadgeState::HasFailures if self.passing > 0 => format!(
                "{} failed, {} passed",
                pluralize(self.failing, "assessment"),
                self.passing
            ),
            BadgeState::HasFailures => {
                format!("{} failed", pluralize(self.failing, "assessment"))
            }
            BadgeState::Processing if self.pending > 0 => {
                format!("{} in progress", pluralize(self.pending, "assessment"))
            }
            BadgeState::Processing => "Assessments are queued".to_string(),
            BadgeState::NoResults => "No assessment results yet".to_string(),
            BadgeState::Locked => {
                "Upgrade your plan to run compliance and security assessments".to_string()
            }
        }
    }

    /// A zero-count badge is only clickable when it drives an upgrade prompt.
    pub fn is_clickable(&self) -> bool {
        self.total > 0
            || self.overall_status == OverallStatus::HasFailures
            || (!self.is_available && self.total == 0)
    }

    pub fn view(&self) -> BadgeView {
        BadgeView {
            state: self.state(),
            css_class: self.badge_class(),
            icon: self.badge_icon(),
            text: self.badge_text(),
            tooltip: self.tooltip_text(),
            clickable: self.is_clickable(),
        }
    }
}

/// "5 Passed"; the bare label when the count is missing
fn counted_label(count: u32, label: &str) -> String {
    if count == 0 {
        label.to_string()
    } else {
        format!("{} {}", count, label)
    }
}

/// "1 assessment", "3 assessments"
fn pluralize(count: u32, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
