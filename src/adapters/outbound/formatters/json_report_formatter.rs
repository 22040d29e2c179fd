use crate::application::presenters::BadgeView;
use crate::application::read_models::{
    AssessmentReadModel, OutcomeGroupsView, RunView, SummarySource,
};
use crate::assessment::domain::OverallStatus;
use crate::ports::outbound::AssessmentFormatter;
use crate::shared::Result;
use serde::Serialize;

/// JsonReportFormatter adapter producing a machine-readable report
///
/// `overall_status` is emitted verbatim, so `no_assessments` and
/// `no_plugins_enabled` stay distinguishable downstream.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ToolInfo<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Serialize)]
struct SummaryCounts {
    total_assessments: u32,
    passing_count: u32,
    failing_count: u32,
    /// pending and in-progress merged
    pending_count: u32,
    in_progress_count: u32,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    report_id: &'a str,
    generated_at: &'a str,
    tool: ToolInfo<'a>,
    sbom_id: &'a str,
    entitled: bool,
    overall_status: OverallStatus,
    summary_source: SummarySource,
    summary: SummaryCounts,
    summary_mismatch: bool,
    badge: &'a BadgeView,
    #[serde(skip_serializing_if = "Option::is_none")]
    results_url: Option<&'a str>,
    results: &'a OutcomeGroupsView,
    history: &'a [RunView],
    #[serde(skip_serializing_if = "is_zero")]
    skipped_records: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl AssessmentFormatter for JsonReportFormatter {
    fn format(&self, model: &AssessmentReadModel) -> Result<String> {
        let summary = &model.summary;
        let report = JsonReport {
            report_id: &model.metadata.report_id,
            generated_at: &model.metadata.generated_at,
            tool: ToolInfo {
                name: &model.metadata.tool_name,
                version: &model.metadata.tool_version,
            },
            sbom_id: &model.sbom_id,
            entitled: model.is_available,
            overall_status: summary.overall_status,
            summary_source: model.summary_source,
            summary: SummaryCounts {
                total_assessments: summary.total_assessments,
                passing_count: summary.passing_count,
                failing_count: summary.failing_count,
                pending_count: summary.display_pending_count(),
                in_progress_count: summary.in_progress_count,
            },
            summary_mismatch: model.summary_mismatch,
            badge: &model.badge,
            results_url: model.results_url.as_deref(),
            results: &model.results,
            history: &model.history,
            skipped_records: model.skipped_records,
        };

        serde_json::to_string_pretty(&report)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| anyhow::anyhow!("Failed to serialize assessment report: {}", e))
    }
}
