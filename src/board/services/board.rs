//! Service layer orchestrating the task board's function-call surface.

use crate::board::{
    domain::{
        BoardDomainError, EmployeeId, PhaseDecision, Role, StaffDirectory, Task, TaskId, Thumbnail,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a board task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Assignee filter for board listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssigneeFilter {
    /// Every task on the board.
    All,
    /// Only tasks with a role assigned to the employee.
    Assignee(EmployeeId),
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task board orchestration service.
///
/// Holds the repository, the immutable staff directory, and the clock; every
/// mutation fetches a copy, applies domain rules to it, and replaces the
/// stored value wholesale.
#[derive(Clone)]
pub struct TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    directory: Arc<StaffDirectory>,
    clock: Arc<C>,
}

impl<R, C> TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, directory: Arc<StaffDirectory>, clock: Arc<C>) -> Self {
        Self {
            repository,
            directory,
            clock,
        }
    }

    /// Returns the staff directory backing assignment validation.
    #[must_use]
    pub fn directory(&self) -> &StaffDirectory {
        &self.directory
    }

    /// Creates a new draft task and appends it to the board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError`] when the title is empty or the repository
    /// rejects storage.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskBoardResult<Task> {
        let task = Task::new(request.title, request.description, &*self.clock)?;
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Saves an edited task, replacing the stored value and refreshing its
    /// edit timestamp.
    ///
    /// Every assignment on the task is re-validated against the staff
    /// directory before the replacement is stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] for assignments the directory
    /// rejects and [`TaskRepositoryError::NotFound`] for unknown task ids.
    pub async fn save_task(&self, task: Task) -> TaskBoardResult<Task> {
        for (role, employee_id) in task.assignments() {
            self.directory.validate_assignment(*role, *employee_id)?;
        }

        let mut updated = task;
        updated.mark_edited(&*self.clock);
        self.repository.update(&updated).await?;
        Ok(updated)
    }

    /// Deletes a task permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] for unknown task ids.
    pub async fn delete_task(&self, id: TaskId) -> TaskBoardResult<()> {
        self.repository.remove(id).await?;
        Ok(())
    }

    /// Starts the project for a task. Idempotent: an already-started task is
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] for unknown task ids.
    pub async fn start_project(&self, id: TaskId) -> TaskBoardResult<Task> {
        let mut task = self.fetch(id).await?;
        task.start(&*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Records the phase decision for a role on a started task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NotStarted`] for drafts and
    /// [`TaskRepositoryError::NotFound`] for unknown task ids.
    pub async fn set_phase_decision(
        &self,
        id: TaskId,
        role: Role,
        decision: PhaseDecision,
    ) -> TaskBoardResult<Task> {
        let mut task = self.fetch(id).await?;
        task.set_phase_decision(role, decision, &*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Assigns an employee to a role slot on a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownEmployee`] or
    /// [`BoardDomainError::RoleMismatch`] for assignments the directory
    /// rejects and [`TaskRepositoryError::NotFound`] for unknown task ids.
    pub async fn assign_role(
        &self,
        id: TaskId,
        role: Role,
        employee_id: EmployeeId,
    ) -> TaskBoardResult<Task> {
        let mut task = self.fetch(id).await?;
        task.assign(role, employee_id, &self.directory, &*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Clears the assignment slot for a role on a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] for unknown task ids.
    pub async fn clear_assignment(&self, id: TaskId, role: Role) -> TaskBoardResult<Task> {
        let mut task = self.fetch(id).await?;
        task.clear_assignment(role, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Fills empty assignment slots whose role has exactly one eligible
    /// employee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] for unknown task ids.
    pub async fn fill_default_assignments(&self, id: TaskId) -> TaskBoardResult<Task> {
        let mut task = self.fetch(id).await?;
        task.fill_default_assignments(&self.directory, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Replaces a task's thumbnail. Applied immediately, independent of the
    /// save path.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] for unknown task ids.
    pub async fn set_thumbnail(&self, id: TaskId, thumbnail: Thumbnail) -> TaskBoardResult<Task> {
        let mut task = self.fetch(id).await?;
        task.set_thumbnail(thumbnail, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Lists board tasks in insertion order, optionally restricted to one
    /// assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the listing fails.
    pub async fn list_tasks(&self, filter: AssigneeFilter) -> TaskBoardResult<Vec<Task>> {
        let tasks = match filter {
            AssigneeFilter::All => self.repository.list_all().await?,
            AssigneeFilter::Assignee(employee_id) => {
                self.repository.find_by_assignee(employee_id).await?
            }
        };
        Ok(tasks)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the lookup fails.
    pub async fn find_task(&self, id: TaskId) -> TaskBoardResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Fetches a task, mapping absence to [`TaskRepositoryError::NotFound`].
    async fn fetch(&self, id: TaskId) -> TaskBoardResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }
}
