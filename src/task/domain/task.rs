//! Task aggregate root and its derived properties.

use super::{
    DueStatus, Priority, RecurrencePattern, RecurrenceRule, TaskDetails, TaskDomainError, TaskId,
    TaskLimits, TaskUpdate, due::Deadline,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    details: TaskDetails,
    is_complete: bool,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new incomplete task stamped with the current clock time.
    #[must_use]
    pub fn new(id: TaskId, details: TaskDetails, clock: &impl Clock) -> Self {
        Self {
            id,
            details,
            is_complete: false,
            created_at: clock.utc(),
        }
    }

    /// Returns a copy of this task with `update` applied.
    ///
    /// Validation runs over the merged fields, so cross-field rules such as
    /// "weekly recurrence requires a day" hold after any update. Identity,
    /// completion, and creation time are carried over unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskDomainError`] when the merged fields are invalid.
    pub fn with_updates(
        &self,
        update: TaskUpdate,
        limits: &TaskLimits,
    ) -> Result<Self, TaskDomainError> {
        let details = self.details.merged_with(update, limits)?;
        Ok(Self {
            id: self.id,
            details,
            is_complete: self.is_complete,
            created_at: self.created_at,
        })
    }

    /// Flips the completion flag.
    pub const fn toggle_complete(&mut self) {
        self.is_complete = !self.is_complete;
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the validated editable fields.
    #[must_use]
    pub const fn details(&self) -> &TaskDetails {
        &self.details
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.details.title()
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.details.description()
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Returns the priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.details.priority()
    }

    /// Returns the tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        self.details.tags()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.details.due_date()
    }

    /// Returns the due time, if any.
    #[must_use]
    pub const fn due_time(&self) -> Option<NaiveTime> {
        self.details.due_time()
    }

    /// Returns the recurrence rule.
    #[must_use]
    pub const fn recurrence_rule(&self) -> RecurrenceRule {
        self.details.recurrence()
    }

    /// Returns the recurrence pattern.
    #[must_use]
    pub const fn recurrence(&self) -> RecurrencePattern {
        self.details.recurrence().pattern()
    }

    /// Returns the recurrence day for weekly and monthly tasks.
    #[must_use]
    pub const fn recurrence_day(&self) -> Option<u8> {
        self.details.recurrence().day()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` when the task repeats.
    #[must_use]
    pub const fn has_recurrence(&self) -> bool {
        self.details.recurrence().is_recurring()
    }

    /// Returns whether the task is incomplete and past its deadline at `now`.
    #[must_use]
    pub fn is_overdue_at(&self, now: NaiveDateTime) -> bool {
        !self.is_complete && self.deadline().has_passed(now)
    }

    /// Returns whether the task is overdue according to the local clock.
    #[must_use]
    pub fn is_overdue(&self, clock: &impl Clock) -> bool {
        self.is_overdue_at(clock.local().naive_local())
    }

    /// Classifies the task's deadline relative to `now`.
    ///
    /// Completed tasks are never [`DueStatus::Overdue`].
    #[must_use]
    pub fn due_status_at(&self, now: NaiveDateTime) -> DueStatus {
        self.deadline().status(self.is_complete, now)
    }

    /// Classifies the task's deadline according to the local clock.
    #[must_use]
    pub fn due_status(&self, clock: &impl Clock) -> DueStatus {
        self.due_status_at(clock.local().naive_local())
    }

    /// Renders the deadline as `No due date`, `YYYY-MM-DD`, or
    /// `YYYY-MM-DD HH:MM`.
    #[must_use]
    pub fn display_due(&self) -> String {
        self.deadline().display()
    }

    /// Returns the deadline as a single instant, defaulting to midnight.
    #[must_use]
    pub fn due_instant(&self) -> Option<NaiveDateTime> {
        self.deadline().instant()
    }

    /// Computes the next occurrence of this task's rule after `current`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotRecurring`] for non-recurring tasks.
    pub fn next_occurrence_from(&self, current: NaiveDate) -> Result<NaiveDate, TaskDomainError> {
        self.recurrence_rule().next_after(current)
    }

    const fn deadline(&self) -> Deadline {
        Deadline {
            date: self.details.due_date(),
            time: self.details.due_time(),
        }
    }
}
