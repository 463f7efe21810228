//! Session lifecycle vocabulary.
//!
//! A generation session is either idle or streaming; a finished session
//! leaves behind the outcome of its terminal transition. Completed and
//! Stopped both collapse back to idle after cleanup — the outcome is what
//! remains observable.

use serde::{Deserialize, Serialize};

/// Whether a generation session is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No session active; the producer clock is disarmed.
    #[default]
    Idle,
    /// A session is producing chunks on the producer clock.
    Streaming,
}

impl SessionPhase {
    pub fn is_streaming(&self) -> bool {
        matches!(self, SessionPhase::Streaming)
    }
}

/// How the most recent session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamOutcome {
    /// The generator reached its word target.
    Completed,
    /// Stopped early — user request, restart, or generator exhaustion.
    Stopped,
}

impl StreamOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            StreamOutcome::Completed => "completed",
            StreamOutcome::Stopped => "stopped",
        }
    }
}

impl std::fmt::Display for StreamOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
