use serde::Serialize;

/// How a single run counts toward the rolled-up status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunOutcome {
    Passed,
    Failed,
    /// Not yet conclusive: queued, running, or missing a readable result
    Pending,
}

impl RunOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunOutcome::Passed => "passed",
            RunOutcome::Failed => "failed",
            RunOutcome::Pending => "pending",
        }
    }
}
