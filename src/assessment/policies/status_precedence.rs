use crate::assessment::domain::OverallStatus;

/// Counts gathered in a single pass over a run set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutcomeTally {
    pub total: u32,
    pub passing: u32,
    pub failing: u32,
    /// Queued runs plus completed runs without a readable result
    pub pending: u32,
    /// Runs currently executing
    pub running: u32,
}

impl OutcomeTally {
    pub fn has_unfinished(&self) -> bool {
        self.pending > 0 || self.running > 0
    }
}

/// StatusPrecedence resolves a tally into one overall status.
///
/// Order of evaluation:
/// 1. not entitled and nothing ran -> `no_plugins_enabled`
/// 2. nothing ran -> `no_assessments`
/// 3. anything unfinished -> `in_progress`, even if siblings already failed,
///    so the badge does not flip to failed and back while a batch completes
/// 4. any failure -> `has_failures`
/// 5. otherwise -> `all_pass`
pub struct StatusPrecedence;

impl StatusPrecedence {
    pub fn resolve(tally: &OutcomeTally, is_available: bool) -> OverallStatus {
        if tally.total == 0 {
            return if is_available {
                OverallStatus::NoAssessments
            } else {
                OverallStatus::NoPluginsEnabled
            };
        }
        if tally.has_unfinished() {
            return OverallStatus::InProgress;
        }
        if tally.failing > 0 {
            return OverallStatus::HasFailures;
        }
        OverallStatus::AllPass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(passing: u32, failing: u32, pending: u32, running: u32) -> OutcomeTally {
        OutcomeTally {
            total: passing + failing + pending + running,
            passing,
            failing,
            pending,
            running,
        }
    }

    #[test]
    fn test_empty_available_is_no_assessments() {
        assert_eq!(
            StatusPrecedence::resolve(&OutcomeTally::default(), true),
            OverallStatus::NoAssessments
        );
    }

    #[test]
    fn test_empty_unavailable_is_no_plugins_enabled() {
        assert_eq!(
            StatusPrecedence::resolve(&OutcomeTally::default(), false),
            OverallStatus::NoPluginsEnabled
        );
    }

    #[test]
    fn test_unfinished_beats_failures() {
        assert_eq!(
            StatusPrecedence::resolve(&tally(0, 3, 1, 0), true),
            OverallStatus::InProgress
        );
        assert_eq!(
            StatusPrecedence::resolve(&tally(2, 1, 0, 1), true),
            OverallStatus::InProgress
        );
    }

    #[test]
    fn test_failures_beat_passes() {
        assert_eq!(
            StatusPrecedence::resolve(&tally(5, 1, 0, 0), true),
            OverallStatus::HasFailures
        );
    }

    #[test]
    fn test_all_pass() {
        assert_eq!(
            StatusPrecedence::resolve(&tally(4, 0, 0, 0), true),
            OverallStatus::AllPass
        );
    }

    #[test]
    fn test_unavailable_with_history_still_resolves_runs() {
        assert_eq!(
            StatusPrecedence::resolve(&tally(2, 0, 0, 0), false),
            OverallStatus::AllPass
        );
    }
}
