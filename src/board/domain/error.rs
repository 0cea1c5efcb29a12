//! Error types for board domain validation and parsing.

use super::{EmployeeId, Role, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The thumbnail payload is empty after trimming.
    #[error("thumbnail payload must not be empty")]
    EmptyThumbnail,

    /// The employee identifier is not present in the staff directory.
    #[error("unknown employee: {0}")]
    UnknownEmployee(EmployeeId),

    /// The employee exists but does not hold the targeted role.
    #[error("employee {employee} does not hold the {role} role")]
    RoleMismatch {
        /// Employee whose assignment was rejected.
        employee: EmployeeId,
        /// Role the assignment targeted.
        role: Role,
    },

    /// Two directory entries share the same employee identifier.
    #[error("duplicate employee identifier: {0}")]
    DuplicateEmployee(EmployeeId),

    /// A phase decision was set on a task that has not been started.
    #[error("task {0} has not been started; phase decisions require a started project")]
    NotStarted(TaskId),
}

/// Error returned while parsing task states.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task state: {0}")]
pub struct ParseTaskStateError(pub String);

/// Error returned while parsing phase decisions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown phase decision: {0}")]
pub struct ParsePhaseDecisionError(pub String);

/// Error returned while resolving role identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role identifier: {0}")]
pub struct ParseRoleError(pub String);
