use crate::assessment::domain::{AssessmentRun, OverallStatus, RunOutcome, RunStatus, StatusSummary};
use crate::assessment::policies::{OutcomeTally, StatusPrecedence};

/// Runs partitioned by outcome, each group in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutcomeGroups<'a> {
    pub failed: Vec<&'a AssessmentRun>,
    pub passed: Vec<&'a AssessmentRun>,
    pub pending: Vec<&'a AssessmentRun>,
}

impl<'a> OutcomeGroups<'a> {
    /// Groups in presentation order: most actionable first
    pub fn in_display_order(&self) -> [(RunOutcome, &[&'a AssessmentRun]); 3] {
        [
            (RunOutcome::Failed, self.failed.as_slice()),
            (RunOutcome::Passed, self.passed.as_slice()),
            (RunOutcome::Pending, self.pending.as_slice()),
        ]
    }

    pub fn len(&self) -> usize {
        self.failed.len() + self.passed.len() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// StatusAggregator reduces the runs for one SBOM into a single status.
///
/// Pure functions over an immutable snapshot; no I/O and no errors.
pub struct StatusAggregator;

impl StatusAggregator {
    /// Single pass over `runs` producing all counts
    pub fn tally(runs: &[AssessmentRun]) -> OutcomeTally {
        runs.iter().fold(OutcomeTally::default(), |mut tally, run| {
            tally.total += 1;
            match run.outcome() {
                RunOutcome::Passed => tally.passing += 1,
                RunOutcome::Failed => tally.failing += 1,
                RunOutcome::Pending if run.status == RunStatus::Running => tally.running += 1,
                RunOutcome::Pending => tally.pending += 1,
            }
            tally
        })
    }

    /// Overall status of `runs` for a viewer with or without the feature
    pub fn overall_status(runs: &[AssessmentRun], is_available: bool) -> OverallStatus {
        StatusPrecedence::resolve(&Self::tally(runs), is_available)
    }

    /// Stable partition into failed, passed and pending runs
    pub fn group_by_outcome(runs: &[AssessmentRun]) -> OutcomeGroups<'_> {
        let mut groups = OutcomeGroups::default();
        for run in runs {
            match run.outcome() {
                RunOutcome::Failed => groups.failed.push(run),
                RunOutcome::Passed => groups.passed.push(run),
                RunOutcome::Pending => groups.pending.push(run),
            }
        }
        groups
    }

    pub fn count_passing(runs: &[AssessmentRun]) -> u32 {
        Self::tally(runs).passing
    }

    pub fn count_failing(runs: &[AssessmentRun]) -> u32 {
        Self::tally(runs).failing
    }

    /// Pending and running merged, as displayed
    pub fn count_pending(runs: &[AssessmentRun]) -> u32 {
        let tally = Self::tally(runs);
        tally.pending + tally.running
    }

    /// Full summary for `runs`
    pub fn summarize(runs: &[AssessmentRun], is_available: bool) -> StatusSummary {
        let tally = Self::tally(runs);
        StatusSummary {
            overall_status: StatusPrecedence::resolve(&tally, is_available),
            total_assessments: tally.total,
            passing_count: tally.passing,
            failing_count: tally.failing,
            pending_count: tally.pending,
            in_progress_count: tally.running,
        }
    }
}
