use crate::application::dto::PanelExpansion;
use crate::application::navigation::{plugin_panel_id, ASSESSMENT_RESULTS_ID};
use crate::application::read_models::{AssessmentReadModel, RunView};
use crate::assessment::domain::{Finding, RunOutcome};
use crate::ports::outbound::AssessmentFormatter;
use crate::shared::Result;

const SUMMARY_TABLE_HEADER: &str = "| Total | Passing | Failing | Pending |\n";
const SUMMARY_TABLE_SEPARATOR: &str = "|-------|---------|---------|---------|\n";

const FINDING_TABLE_HEADER: &str = "| Status | Finding | Severity | Remediation |\n";
const FINDING_TABLE_SEPARATOR: &str = "|--------|---------|----------|-------------|\n";

const HISTORY_TABLE_HEADER: &str = "| Plugin | Reason | Status | Outcome | Started | Duration |\n";
const HISTORY_TABLE_SEPARATOR: &str = "|--------|--------|--------|---------|---------|----------|\n";

/// MarkdownReportFormatter adapter for a human-readable assessment report
///
/// Sections follow the results view: summary, then failed, passed and
/// pending plugins, then the run history. Each plugin section carries an
/// `id="plugin-<name>"` anchor; findings are listed only for expanded panels.
pub struct MarkdownReportFormatter {
    expansion: PanelExpansion,
}

impl MarkdownReportFormatter {
    pub fn new(expansion: PanelExpansion) -> Self {
        Self { expansion }
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn outcome_icon(outcome: RunOutcome) -> &'static str {
        match outcome {
            RunOutcome::Passed => "✅",
            RunOutcome::Failed => "❌",
            RunOutcome::Pending => "⏳",
        }
    }

    fn format_duration(seconds: Option<i64>) -> String {
        match seconds {
            Some(s) if s >= 60 => format!("{}m {}s", s / 60, s % 60),
            Some(s) => format!("{}s", s),
            None => "-".to_string(),
        }
    }
}

/// Helper methods for rendering sections
impl MarkdownReportFormatter {
    fn render_header(&self, output: &mut String, model: &AssessmentReadModel) {
        output.push_str("# Assessment Results\n\n");
        output.push_str(&format!("<a id=\"{}\"></a>\n\n", ASSESSMENT_RESULTS_ID));
        if !model.sbom_id.is_empty() {
            output.push_str(&format!("**SBOM:** `{}`\n\n", model.sbom_id));
        }
        output.push_str(&format!(
            "**Status:** {} `{}` ({})\n\n",
            model.badge.text, model.summary.overall_status, model.badge.tooltip
        ));
        if let Some(url) = &model.results_url {
            output.push_str(&format!("**Details:** {}\n\n", url));
        }
    }

    fn render_summary(&self, output: &mut String, model: &AssessmentReadModel) {
        let summary = &model.summary;
        output.push_str(SUMMARY_TABLE_HEADER);
        output.push_str(SUMMARY_TABLE_SEPARATOR);
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n\n",
            summary.total_assessments,
            summary.passing_count,
            summary.failing_count,
            summary.display_pending_count()
        ));
        if model.summary_mismatch {
            output.push_str(&format!(
                "> **Note:** the reported status disagrees with the latest runs (`{}`).\n\n",
                model.recomputed_summary.overall_status
            ));
        }
    }

    fn render_group(&self, output: &mut String, title: &str, runs: &[RunView]) {
        if runs.is_empty() {
            return;
        }
        output.push_str(&format!("## {} ({})\n\n", title, runs.len()));
        for run in runs {
            self.render_run(output, run);
        }
    }

    fn render_run(&self, output: &mut String, run: &RunView) {
        output.push_str(&format!(
            "### <a id=\"{}\"></a>{} {}\n\n",
            plugin_panel_id(&run.plugin_name),
            Self::outcome_icon(run.outcome),
            run.display_name
        ));

        let mut facts = Vec::new();
        if !run.category.is_empty() {
            facts.push(format!("**Category:** {}", run.category));
        }
        facts.push(format!("**Reason:** {}", run.run_reason));
        facts.push(format!("**Status:** {}", run.status.as_str()));
        if run.duration_seconds.is_some() {
            facts.push(format!(
                "**Duration:** {}",
                Self::format_duration(run.duration_seconds)
            ));
        }
        if let Some(summary) = &run.finding_summary {
            facts.push(format!(
                "**Findings:** {} total, {} pass, {} fail, {} warning, {} error",
                summary.total_findings,
                summary.pass_count,
                summary.fail_count,
                summary.warning_count,
                summary.error_count
            ));
        }
        for fact in facts {
            output.push_str(&format!("- {}\n", fact));
        }
        if let Some(url) = &run.detail_url {
            output.push_str(&format!("- **Link:** {}\n", url));
        }
        if let Some(error) = &run.error_message {
            output.push_str(&format!("- **Error:** {}\n", error.replace('\n', " ")));
        }
        output.push('\n');

        if self.expansion.is_expanded(&run.plugin_name) {
            self.render_findings(output, &run.findings);
        }
    }

    fn render_findings(&self, output: &mut String, findings: &[Finding]) {
        if findings.is_empty() {
            return;
        }
        output.push_str(FINDING_TABLE_HEADER);
        output.push_str(FINDING_TABLE_SEPARATOR);
        for finding in findings {
            let title = if finding.title.is_empty() {
                &finding.id
            } else {
                &finding.title
            };
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                finding.status.as_str(),
                Self::escape_cell(title),
                Self::escape_cell(finding.severity.as_deref().unwrap_or("-")),
                Self::escape_cell(finding.remediation.as_deref().unwrap_or(""))
            ));
        }
        output.push('\n');

        for finding in findings {
            let packages = finding.affected_packages();
            if packages.is_empty() {
                continue;
            }
            output.push_str(&format!(
                "<details><summary>{}: {} affected package(s)</summary>\n\n",
                Self::escape_cell(&finding.id),
                packages.len()
            ));
            for package in packages {
                output.push_str(&format!("- `{}`\n", package));
            }
            output.push_str("\n</details>\n\n");
        }
    }

    fn render_history(&self, output: &mut String, history: &[RunView]) {
        if history.is_empty() {
            return;
        }
        output.push_str("## Assessment History\n\n");
        output.push_str(HISTORY_TABLE_HEADER);
        output.push_str(HISTORY_TABLE_SEPARATOR);
        for run in history {
            let started = run
                .started_at
                .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "| {} | {} | {} | {} {} | {} | {} |\n",
                Self::escape_cell(&run.display_name),
                run.run_reason,
                run.status.as_str(),
                Self::outcome_icon(run.outcome),
                run.outcome.as_str(),
                started,
                Self::format_duration(run.duration_seconds)
            ));
        }
        output.push('\n');
    }
}

impl AssessmentFormatter for MarkdownReportFormatter {
    fn format(&self, model: &AssessmentReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_summary(&mut output, model);

        if model.results.is_empty() {
            output.push_str("_No assessment results yet._\n\n");
        }
        self.render_group(&mut output, "Failed", &model.results.failed);
        self.render_group(&mut output, "Passed", &model.results.passed);
        self.render_group(&mut output, "Pending", &model.results.pending);
        self.render_history(&mut output, &model.history);

        Ok(output)
    }
}
