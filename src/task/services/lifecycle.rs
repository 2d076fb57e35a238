//! Service layer for creating, inspecting, and mutating tasks.

use crate::task::{
    domain::{
        ParseTaskFieldError, Task, TaskDomainError, TaskDraft, TaskId, TaskLimits, TaskUpdate,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed for a reason other than a missing task.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

impl From<ParseTaskFieldError> for TaskServiceError {
    fn from(err: ParseTaskFieldError) -> Self {
        Self::Validation(err.into())
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Construct once at start-up and pass by reference to whatever layer needs
/// it; the service holds no global state.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    limits: TaskLimits,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service with the standard field limits.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            limits: TaskLimits::STANDARD,
        }
    }

    /// Replaces the field limits used for validation.
    #[must_use]
    pub const fn with_limits(mut self, limits: TaskLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the field limits used for validation.
    #[must_use]
    pub const fn limits(&self) -> &TaskLimits {
        &self.limits
    }

    /// Validates `draft` and stores it as a new task with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when a field is invalid or a
    /// recurring draft has no due date; the repository is not touched in that
    /// case.
    pub fn add_task(&self, draft: TaskDraft) -> TaskServiceResult<Task> {
        if draft.is_recurring() && !draft.has_due_date() {
            return Err(TaskDomainError::RecurrenceRequiresDueDate.into());
        }
        let details = draft.validate(&self.limits)?;
        let id = self.repository.next_id()?;
        let task = Task::new(id, details, &*self.clock);
        self.repository.add(&task)?;
        debug!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    pub fn get_task(&self, id: TaskId) -> TaskServiceResult<Task> {
        Ok(self.repository.get(id)?)
    }

    /// Applies a partial update to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// [`TaskServiceError::Validation`] when the merged fields are invalid,
    /// leaving the stored task unchanged.
    pub fn update_task(&self, id: TaskId, update: TaskUpdate) -> TaskServiceResult<Task> {
        let current = self.repository.get(id)?;
        let updated = current.with_updates(update, &self.limits)?;
        let stored = self.repository.update(&updated)?;
        debug!(task_id = %id, "task updated");
        Ok(stored)
    }

    /// Flips the completion flag of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    pub fn toggle_complete(&self, id: TaskId) -> TaskServiceResult<Task> {
        let mut task = self.repository.get(id)?;
        task.toggle_complete();
        let stored = self.repository.update(&task)?;
        debug!(task_id = %id, is_complete = stored.is_complete(), "task completion toggled");
        Ok(stored)
    }

    /// Deletes a task. Its identifier is never reissued.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    pub fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository.delete(id)?;
        debug!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Returns every task ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store is unavailable.
    pub fn list_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.all()?)
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store is unavailable.
    pub fn count_tasks(&self) -> TaskServiceResult<usize> {
        Ok(self.repository.count()?)
    }

    /// Creates the follow-up task of a recurring task.
    ///
    /// The new task copies the source's editable fields, is incomplete, and
    /// is due on the rule's next occurrence after today's local date. The
    /// source task is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the source does not exist
    /// and [`TaskServiceError::Validation`] when it does not recur.
    pub fn schedule_next_occurrence(&self, id: TaskId) -> TaskServiceResult<Task> {
        let source = self.repository.get(id)?;
        let today = self.clock.local().date_naive();
        let next_due = source.next_occurrence_from(today)?;

        let mut draft = source.details().clone().into_draft();
        draft.due_date = Some(next_due);
        let details = draft.validate(&self.limits)?;

        let next_id = self.repository.next_id()?;
        let task = Task::new(next_id, details, &*self.clock);
        self.repository.add(&task)?;
        debug!(source_id = %id, task_id = %task.id(), due = %next_due, "next occurrence scheduled");
        Ok(task)
    }
}
