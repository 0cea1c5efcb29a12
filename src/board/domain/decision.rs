//! Task lifecycle state and per-role phase decisions.

use super::{ParsePhaseDecisionError, ParseTaskStateError};
use serde::{Deserialize, Serialize};

/// Task lifecycle state.
///
/// Per-role approval outcomes live in the task's phase-decision map, never
/// here; the only task-level transition is `Draft` to `Started` and it is
/// irreversible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// Task has been created but the project has not started.
    Draft,
    /// Task is actively progressing; phase decisions are settable.
    Started,
}

impl TaskState {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Started => "started",
        }
    }

    /// Returns whether the project has been started.
    #[must_use]
    pub const fn is_started(self) -> bool {
        matches!(self, Self::Started)
    }

    /// Returns whether a transition to `target` is permitted.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!((self, target), (Self::Draft, Self::Started))
    }
}

impl TryFrom<&str> for TaskState {
    type Error = ParseTaskStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "draft" => Ok(Self::Draft),
            "started" => Ok(Self::Started),
            _ => Err(ParseTaskStateError(value.to_owned())),
        }
    }
}

/// Approval outcome for a task's work under one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseDecision {
    /// No decision has been recorded for the phase.
    Pending,
    /// The phase's work is approved.
    Approved,
    /// The phase's work needs revision.
    Revised,
    /// The phase's work is denied.
    Denied,
}

impl PhaseDecision {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Revised => "revised",
            Self::Denied => "denied",
        }
    }

    /// Returns whether an outcome has been recorded.
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl TryFrom<&str> for PhaseDecision {
    type Error = ParsePhaseDecisionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            // The empty string is the legacy encoding of an undecided phase.
            "" | "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "revised" => Ok(Self::Revised),
            "denied" => Ok(Self::Denied),
            _ => Err(ParsePhaseDecisionError(value.to_owned())),
        }
    }
}
