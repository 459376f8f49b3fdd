//! Score reporting boundary
//!
//! Called exactly once per session, at the terminal transition. The call
//! is fire-and-forget: a failed submission is logged by the caller and
//! never rolls back or pauses the already-final game state.

use serde::{Deserialize, Serialize};

/// Final result of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: u32,
    pub elapsed_seconds: u32,
    /// Whether the player reached the last level
    pub completed: bool,
}

/// Submission failure. Carries a message for the caller's log; the
/// simulation itself never inspects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportError(pub String);

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "score submission failed: {}", self.0)
    }
}

impl std::error::Error for ReportError {}

/// Consumer of final scores
pub trait ScoreSink {
    fn submit(&mut self, report: &ScoreReport) -> Result<(), ReportError>;
}

/// Test double that records every submission
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub reports: Vec<ScoreReport>,
}

impl ScoreSink for RecordingSink {
    fn submit(&mut self, report: &ScoreReport) -> Result<(), ReportError> {
        self.reports.push(*report);
        Ok(())
    }
}

/// Test double that always fails
#[derive(Debug, Default)]
pub struct FailingSink {
    pub attempts: u32,
}

impl ScoreSink for FailingSink {
    fn submit(&mut self, _report: &ScoreReport) -> Result<(), ReportError> {
        self.attempts += 1;
        Err(ReportError("backend unreachable".into()))
    }
}
