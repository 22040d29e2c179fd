//! Builder for constructing AssessmentReadModel from a parsed payload

use super::assessment_payload::AssessmentPayload;
use super::assessment_read_model::{
    AssessmentReadModel, OutcomeGroupsView, ReportMetadataView, SummarySource,
};
use super::run_view::RunView;
use crate::application::navigation::{assessment_results_url, plugin_anchor, plugin_detail_url};
use crate::application::presenters::BadgePresenter;
use crate::assessment::domain::{AssessmentRun, StatusSummary};
use crate::assessment::services::{PluginFilter, StatusAggregator};
use chrono::Utc;
use uuid::Uuid;

const TOOL_NAME: &str = "sbom-assess";

/// Inputs beyond the payload itself
#[derive(Debug, Clone, Copy)]
pub struct ReadModelOptions<'a> {
    pub is_available: bool,
    pub component_id: Option<&'a str>,
    /// Prefix for detail URLs, e.g. `https://app.example.com`
    pub base_url: Option<&'a str>,
    pub plugin_filter: Option<&'a PluginFilter>,
}

impl Default for ReadModelOptions<'_> {
    fn default() -> Self {
        Self {
            is_available: true,
            component_id: None,
            base_url: None,
            plugin_filter: None,
        }
    }
}

/// Builder for constructing AssessmentReadModel from a payload
pub struct AssessmentReadModelBuilder;

impl AssessmentReadModelBuilder {
    /// Builds the read model.
    ///
    /// The payload's own summary drives the badge when it is present, names a
    /// known status, and no plugin exclusions apply. Otherwise the summary is
    /// recomputed from `latest_runs`. Either way an empty summary for a viewer
    /// without the feature reads `no_plugins_enabled`.
    pub fn build(payload: AssessmentPayload, options: &ReadModelOptions<'_>) -> AssessmentReadModel {
        let filter = options.plugin_filter.filter(|f| !f.is_empty());
        let (latest_runs, all_runs) = match filter {
            Some(filter) => (
                filter.filter_runs(payload.latest_runs),
                filter.filter_runs(payload.all_runs),
            ),
            None => (payload.latest_runs, payload.all_runs),
        };

        let recomputed_summary = StatusAggregator::summarize(&latest_runs, options.is_available);
        let payload_summary = payload
            .status_summary
            .filter(|s| filter.is_none() && s.overall_status.is_known());

        let (summary, summary_source) = match payload_summary {
            Some(summary) => (
                summary.for_viewer(options.is_available),
                SummarySource::Payload,
            ),
            None => (recomputed_summary, SummarySource::Recomputed),
        };
        let summary_mismatch = summary_source == SummarySource::Payload
            && !latest_runs.is_empty()
            && Self::disagrees(&summary, &recomputed_summary);

        let badge = BadgePresenter::new(&summary, options.is_available).view();

        let groups = StatusAggregator::group_by_outcome(&latest_runs);
        let to_views = |runs: &[&AssessmentRun]| -> Vec<RunView> {
            runs.iter()
                .map(|run| Self::build_run_view(run, &payload.sbom_id, options))
                .collect()
        };
        let results = OutcomeGroupsView {
            failed: to_views(groups.failed.as_slice()),
            passed: to_views(groups.passed.as_slice()),
            pending: to_views(groups.pending.as_slice()),
        };
        let history = all_runs
            .iter()
            .map(|run| Self::build_run_view(run, &payload.sbom_id, options))
            .collect();

        let results_url = options.component_id.map(|component_id| {
            Self::with_base(
                options.base_url,
                assessment_results_url(component_id, &payload.sbom_id),
            )
        });

        AssessmentReadModel {
            metadata: Self::build_metadata(),
            sbom_id: payload.sbom_id,
            is_available: options.is_available,
            summary,
            summary_source,
            recomputed_summary,
            summary_mismatch,
            badge,
            results,
            history,
            results_url,
            skipped_records: payload.skipped_records,
        }
    }

    fn disagrees(a: &StatusSummary, b: &StatusSummary) -> bool {
        a.overall_status != b.overall_status
            || a.total_assessments != b.total_assessments
            || a.passing_count != b.passing_count
            || a.failing_count != b.failing_count
    }

    fn build_metadata() -> ReportMetadataView {
        ReportMetadataView {
            report_id: format!("urn:uuid:{}", Uuid::new_v4()),
            generated_at: Utc::now().to_rfc3339(),
            tool_name: TOOL_NAME.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    fn build_run_view(run: &AssessmentRun, sbom_id: &str, options: &ReadModelOptions<'_>) -> RunView {
        // runs carry their own sbom_id; fall back to the payload's
        let run_sbom_id = if run.sbom_id.is_empty() {
            sbom_id
        } else {
            &run.sbom_id
        };
        let detail_url = options.component_id.map(|component_id| {
            Self::with_base(
                options.base_url,
                plugin_detail_url(component_id, run_sbom_id, &run.plugin_name),
            )
        });
        let result = run.parsed_result();

        RunView {
            id: run.id.clone(),
            plugin_name: run.plugin_name.clone(),
            display_name: run.display_name().to_string(),
            category: run.category.clone(),
            run_reason: run.run_reason.label(),
            status: run.status,
            outcome: run.outcome(),
            started_at: run.started_at,
            completed_at: run.completed_at,
            duration_seconds: run.duration().map(|d| d.num_seconds()),
            error_message: run.error_message.clone(),
            finding_summary: run.finding_summary(),
            findings: result.map(|r| r.findings).unwrap_or_default(),
            anchor: plugin_anchor(&run.plugin_name),
            detail_url,
        }
    }

    fn with_base(base_url: Option<&str>, path: String) -> String {
        match base_url {
            Some(base) => format!("{}{}", base.trim_end_matches('/'), path),
            None => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::presenters::BadgeState;
    use crate::assessment::domain::{OverallStatus, RunOutcome};

    const PAYLOAD: &str = r#"{
        "sbom_id": "sbom-1",
        "status_summary": {
            "overall_status": "has_failures",
            "total_assessments": 3,
            "passing_count": 2,
            "failing_count": 1,
            "pending_count": 0,
            "in_progress_count": 0
        },
        "latest_runs": [
            {"id": "r1", "plugin_name": "ntia", "plugin_display_name": "NTIA Minimum Elements",
             "status": "completed", "run_reason": "on_upload",
             "started_at": "2024-05-01T10:00:00Z", "completed_at": "2024-05-01T10:00:03Z",
             "result": {"summary": {"total_findings": 2, "pass_count": 2}, "findings": []}},
            {"id": "r2", "plugin_name": "cisa", "status": "completed",
             "result": {"summary": {"total_findings": 2, "pass_count": 1, "fail_count": 1},
                        "findings": [{"id": "f1", "title": "Missing supplier", "status": "fail"}]}},
            {"id": "r3", "plugin_name": "osv", "status": "completed",
             "result": {"summary": {"total_findings": 0}}}
        ],
        "all_runs": [
            {"id": "r1", "plugin_name": "ntia", "status": "completed"},
            {"id": "r0", "plugin_name": "ntia", "status": "failed", "error_message": "timeout"}
        ]
    }"#;

    fn payload() -> AssessmentPayload {
        AssessmentPayload::from_json_lenient(PAYLOAD)
    }

    #[test]
    fn test_payload_summary_is_authoritative() {
        let model = AssessmentReadModelBuilder::build(payload(), &ReadModelOptions::default());
        assert_eq!(model.summary_source, SummarySource::Payload);
        assert_eq!(model.overall_status(), OverallStatus::HasFailures);
        assert!(!model.summary_mismatch);
        assert_eq!(model.badge.state, BadgeState::HasFailures);
        assert_eq!(model.badge.text, "1 Failed");
    }

    #[test]
    fn test_payload_summary_respects_availability() {
        let payload = AssessmentPayload::from_json_lenient(
            r#"{"status_summary": {"overall_status": "no_assessments", "total_assessments": 0}}"#,
        );
        let options = ReadModelOptions {
            is_available: false,
            ..Default::default()
        };
        let model = AssessmentReadModelBuilder::build(payload, &options);

        assert_eq!(model.summary_source, SummarySource::Payload);
        assert_eq!(model.overall_status(), OverallStatus::NoPluginsEnabled);
        assert_eq!(model.badge.state, BadgeState::Locked);
        assert!(!model.summary_mismatch);
    }

    #[test]
    fn test_results_grouped_failed_first() {
        let model = AssessmentReadModelBuilder::build(payload(), &ReadModelOptions::default());
        assert_eq!(model.plugin_names(), vec!["cisa", "ntia", "osv"]);
        assert_eq!(model.results.failed[0].findings.len(), 1);
        assert_eq!(model.results.failed[0].outcome, RunOutcome::Failed);
        assert_eq!(model.results.passed[0].display_name, "NTIA Minimum Elements");
        assert_eq!(model.results.passed[0].duration_seconds, Some(3));
        assert_eq!(model.results.passed[0].run_reason, "On upload");
        assert_eq!(model.history.len(), 2);
    }

    #[test]
    fn test_detail_urls_need_component() {
        let model = AssessmentReadModelBuilder::build(payload(), &ReadModelOptions::default());
        assert!(model.results_url.is_none());
        assert!(model.results.failed[0].detail_url.is_none());
        assert_eq!(model.results.failed[0].anchor, "#plugin-cisa");

        let options = ReadModelOptions {
            component_id: Some("comp-7"),
            base_url: Some("https://app.example.com/"),
            ..Default::default()
        };
        let model = AssessmentReadModelBuilder::build(payload(), &options);
        assert_eq!(
            model.results.failed[0].detail_url.as_deref(),
            Some("https://app.example.com/component/comp-7/sbom/sbom-1/#plugin-cisa")
        );
        assert_eq!(
            model.results_url.as_deref(),
            Some("https://app.example.com/component/comp-7/sbom/sbom-1/#assessment-results")
        );
    }

    #[test]
    fn test_exclusions_force_recompute() {
        let filter = PluginFilter::new(vec!["cisa".to_string()]).unwrap();
        let options = ReadModelOptions {
            plugin_filter: Some(&filter),
            ..Default::default()
        };
        let model = AssessmentReadModelBuilder::build(payload(), &options);
        assert_eq!(model.summary_source, SummarySource::Recomputed);
        assert_eq!(model.overall_status(), OverallStatus::AllPass);
        assert_eq!(model.summary.total_assessments, 2);
        assert_eq!(model.badge.text, "2 Passed");
    }

    #[test]
    fn test_mismatch_detected() {
        let content = PAYLOAD.replace("\"overall_status\": \"has_failures\"", "\"overall_status\": \"all_pass\"");
        let model = AssessmentReadModelBuilder::build(
            AssessmentPayload::from_json_lenient(&content),
            &ReadModelOptions::default(),
        );
        assert_eq!(model.summary_source, SummarySource::Payload);
        assert!(model.summary_mismatch);
        assert_eq!(model.recomputed_summary.overall_status, OverallStatus::HasFailures);
    }

    #[test]
    fn test_unknown_payload_status_falls_back_to_runs() {
        let content = PAYLOAD.replace("\"overall_status\": \"has_failures\"", "\"overall_status\": \"mystery\"");
        let model = AssessmentReadModelBuilder::build(
            AssessmentPayload::from_json_lenient(&content),
            &ReadModelOptions::default(),
        );
        assert_eq!(model.summary_source, SummarySource::Recomputed);
        assert_eq!(model.overall_status(), OverallStatus::HasFailures);
    }

    #[test]
    fn test_empty_payload_for_unentitled_viewer() {
        let options = ReadModelOptions {
            is_available: false,
            ..Default::default()
        };
        let model = AssessmentReadModelBuilder::build(AssessmentPayload::from_json_lenient("{}"), &options);
        assert_eq!(model.overall_status(), OverallStatus::NoPluginsEnabled);
        assert_eq!(model.badge.state, BadgeState::Locked);
        assert!(model.badge.clickable);
        assert!(model.results.is_empty());
    }

    #[test]
    fn test_metadata_generated() {
        let model = AssessmentReadModelBuilder::build(payload(), &ReadModelOptions::default());
        assert!(model.metadata.report_id.starts_with("urn:uuid:"));
        assert_eq!(model.metadata.tool_name, "sbom-assess");
        assert!(!model.metadata.generated_at.is_empty());
    }
}
