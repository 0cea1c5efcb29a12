//! In-memory task repository backing the board.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{EmployeeId, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Tasks are cloned on the way in and out, so repository state is never
/// aliased by callers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<BoardState>>,
}

#[derive(Debug, Default)]
struct BoardState {
    tasks: HashMap<TaskId, Task>,
    /// Board positions, oldest first.
    order: Vec<TaskId>,
    assignee_index: HashMap<EmployeeId, Vec<TaskId>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn index_assignees(state: &mut BoardState, task: &Task) {
    for employee_id in task.assignments().values() {
        let ids = state.assignee_index.entry(*employee_id).or_default();
        if !ids.contains(&task.id()) {
            ids.push(task.id());
        }
    }
}

/// Removes a task ID from the employee's index entry, cleaning up the entry
/// if empty.
fn remove_from_index(
    index: &mut HashMap<EmployeeId, Vec<TaskId>>,
    task_id: TaskId,
    employee_id: EmployeeId,
) {
    if let Some(ids) = index.get_mut(&employee_id) {
        ids.retain(|id| *id != task_id);
        if ids.is_empty() {
            index.remove(&employee_id);
        }
    }
}

/// Collects the indexed tasks in board order.
fn find_by_index(state: &BoardState, employee_id: EmployeeId) -> Vec<Task> {
    state
        .assignee_index
        .get(&employee_id)
        .map(|ids| {
            state
                .order
                .iter()
                .filter(|id| ids.contains(*id))
                .filter_map(|id| state.tasks.get(id).cloned())
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        state.order.push(task.id());
        index_assignees(&mut state, task);
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let old_task = state
            .tasks
            .get(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?
            .clone();

        // Drop stale index entries before adding the updated ones.
        for employee_id in old_task.assignments().values() {
            remove_from_index(&mut state.assignee_index, task.id(), *employee_id);
        }

        index_assignees(&mut state, task);
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let task = state
            .tasks
            .remove(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;

        state.order.retain(|task_id| *task_id != id);
        for employee_id in task.assignments().values() {
            remove_from_index(&mut state.assignee_index, id, *employee_id);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.tasks.get(id).cloned())
            .collect())
    }

    async fn find_by_assignee(&self, employee_id: EmployeeId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(find_by_index(&state, employee_id))
    }
}
