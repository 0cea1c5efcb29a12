//! Task aggregate root and lifecycle rules.

use super::{
    BoardDomainError, EmployeeId, PhaseDecision, Role, StaffDirectory, TaskId, TaskState, Thumbnail,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Task aggregate root.
///
/// A task is created as a draft with no assignments and an undecided phase
/// map covering every role. Assignments and content stay editable in both
/// states; phase decisions only become settable once the project starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    thumbnail: Option<Thumbnail>,
    assignments: BTreeMap<Role, EmployeeId>,
    phase_decisions: BTreeMap<Role, PhaseDecision>,
    state: TaskState,
    created_at: DateTime<Utc>,
    last_edited: DateTime<Utc>,
}

impl Task {
    /// Creates a new draft task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            title: validated_title(title)?,
            description: description.into(),
            thumbnail: None,
            assignments: BTreeMap::new(),
            phase_decisions: Role::ALL
                .into_iter()
                .map(|role| (role, PhaseDecision::Pending))
                .collect(),
            state: TaskState::Draft,
            created_at: timestamp,
            last_edited: timestamp,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the thumbnail payload, if one has been set.
    #[must_use]
    pub const fn thumbnail(&self) -> Option<&Thumbnail> {
        self.thumbnail.as_ref()
    }

    /// Returns the task lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest edit timestamp.
    #[must_use]
    pub const fn last_edited(&self) -> DateTime<Utc> {
        self.last_edited
    }

    /// Returns the role assignment map.
    #[must_use]
    pub const fn assignments(&self) -> &BTreeMap<Role, EmployeeId> {
        &self.assignments
    }

    /// Returns the employee assigned to the role, if any.
    #[must_use]
    pub fn assignee(&self, role: Role) -> Option<EmployeeId> {
        self.assignments.get(&role).copied()
    }

    /// Returns whether the employee is assigned to any role on this task.
    #[must_use]
    pub fn is_assigned_to(&self, employee_id: EmployeeId) -> bool {
        self.assignments.values().any(|id| *id == employee_id)
    }

    /// Returns the full phase-decision map.
    #[must_use]
    pub const fn phase_decisions(&self) -> &BTreeMap<Role, PhaseDecision> {
        &self.phase_decisions
    }

    /// Returns the recorded decision for the role's phase.
    #[must_use]
    pub fn phase_decision(&self, role: Role) -> PhaseDecision {
        self.phase_decisions
            .get(&role)
            .copied()
            .unwrap_or(PhaseDecision::Pending)
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn set_title(
        &mut self,
        title: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), BoardDomainError> {
        self.title = validated_title(title)?;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>, clock: &impl Clock) {
        self.description = description.into();
        self.touch(clock);
    }

    /// Replaces the thumbnail payload.
    pub fn set_thumbnail(&mut self, thumbnail: Thumbnail, clock: &impl Clock) {
        self.thumbnail = Some(thumbnail);
        self.touch(clock);
    }

    /// Assigns an employee to a role slot, replacing any previous assignee.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownEmployee`] or
    /// [`BoardDomainError::RoleMismatch`] when the directory rejects the
    /// pairing.
    pub fn assign(
        &mut self,
        role: Role,
        employee_id: EmployeeId,
        directory: &StaffDirectory,
        clock: &impl Clock,
    ) -> Result<(), BoardDomainError> {
        directory.validate_assignment(role, employee_id)?;
        self.assignments.insert(role, employee_id);
        self.touch(clock);
        Ok(())
    }

    /// Clears the role's assignment slot; a no-op when the slot is empty.
    pub fn clear_assignment(&mut self, role: Role, clock: &impl Clock) {
        if self.assignments.remove(&role).is_some() {
            self.touch(clock);
        }
    }

    /// Fills every empty assignment slot whose role has exactly one eligible
    /// employee. Existing assignments are never overwritten.
    pub fn fill_default_assignments(&mut self, directory: &StaffDirectory, clock: &impl Clock) {
        let mut changed = false;
        for role in Role::ALL {
            if self.assignments.contains_key(&role) {
                continue;
            }
            if let Some(employee) = directory.sole_member(role) {
                self.assignments.insert(role, employee.id());
                changed = true;
            }
        }
        if changed {
            self.touch(clock);
        }
    }

    /// Starts the project, transitioning `Draft` to `Started`.
    ///
    /// Idempotent: starting an already-started task leaves the state and the
    /// edit timestamp unchanged. The transition is irreversible.
    pub fn start(&mut self, clock: &impl Clock) {
        if self.state.can_transition_to(TaskState::Started) {
            self.state = TaskState::Started;
            self.touch(clock);
        }
    }

    /// Records the decision for the role's phase.
    ///
    /// Decisions are independent per role and may target roles with no
    /// assignee. Setting [`PhaseDecision::Pending`] clears a prior outcome.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NotStarted`] while the task is a draft.
    pub fn set_phase_decision(
        &mut self,
        role: Role,
        decision: PhaseDecision,
        clock: &impl Clock,
    ) -> Result<(), BoardDomainError> {
        if !self.state.is_started() {
            return Err(BoardDomainError::NotStarted(self.id));
        }
        self.phase_decisions.insert(role, decision);
        self.touch(clock);
        Ok(())
    }

    /// Refreshes the edit timestamp to the current clock time.
    ///
    /// Exposed for the save path, which replaces a stored task wholesale and
    /// must record when the replacement happened.
    pub fn mark_edited(&mut self, clock: &impl Clock) {
        self.touch(clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.last_edited = clock.utc();
    }
}

/// Validates that a title is non-empty after trimming.
fn validated_title(title: impl Into<String>) -> Result<String, BoardDomainError> {
    let raw = title.into();
    let normalized = raw.trim();
    if normalized.is_empty() {
        return Err(BoardDomainError::EmptyTitle);
    }
    Ok(normalized.to_owned())
}
