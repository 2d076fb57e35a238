//! Partial updates with explicit unset, clear, and set states.

use super::{Priority, RecurrencePattern, TaskDetails, TaskDomainError, TaskLimits};
use chrono::{NaiveDate, NaiveTime};

/// Three-state change to an optional field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Leave the field unchanged.
    Unset,
    /// Clear the field.
    Clear,
    /// Replace the field with a value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// Resolves the update against the current value.
    #[must_use]
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Unset => current,
            Self::Clear => None,
            Self::Set(value) => Some(value),
        }
    }

    /// Returns `true` when the field should be left unchanged.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    /// `Some` sets the field; `None` clears it.
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Clear, Self::Set)
    }
}

/// Partial update of a task's editable fields.
///
/// Every field defaults to "leave unchanged". Tags are changed through
/// additive and subtractive deltas rather than replacement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskUpdate {
    /// New title; `None` keeps the current title.
    pub title: Option<String>,
    /// Description change.
    pub description: FieldUpdate<String>,
    /// Priority change.
    pub priority: FieldUpdate<Priority>,
    /// Tags appended to the current tags.
    pub add_tags: Vec<String>,
    /// Tags removed from the current tags; absent tags are ignored.
    pub remove_tags: Vec<String>,
    /// Due date change.
    pub due_date: FieldUpdate<NaiveDate>,
    /// Due time change.
    pub due_time: FieldUpdate<NaiveTime>,
    /// New recurrence pattern; `None` keeps the current pattern.
    pub recurrence: Option<RecurrencePattern>,
    /// Recurrence day change.
    pub recurrence_day: FieldUpdate<u8>,
}

impl TaskUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when applying the update would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_unset()
            && self.priority.is_unset()
            && self.add_tags.is_empty()
            && self.remove_tags.is_empty()
            && self.due_date.is_unset()
            && self.due_time.is_unset()
            && self.recurrence.is_none()
            && self.recurrence_day.is_unset()
    }
}

impl TaskDetails {
    /// Merges `update` into a copy of these details and re-validates the
    /// merged result as a whole.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskDomainError`] when the merged fields violate any
    /// invariant; `self` is left untouched.
    pub fn merged_with(
        &self,
        update: TaskUpdate,
        limits: &TaskLimits,
    ) -> Result<Self, TaskDomainError> {
        let mut draft = self.clone().into_draft();

        if let Some(title) = update.title {
            draft.title = title;
        }
        draft.description = update.description.apply(draft.description);
        draft.priority = update.priority.apply(draft.priority);
        draft.tags.extend(update.add_tags);
        draft.tags.retain(|tag| {
            !update
                .remove_tags
                .iter()
                .any(|removed| removed.trim() == tag.trim())
        });
        draft.due_date = update.due_date.apply(draft.due_date);
        draft.due_time = update.due_time.apply(draft.due_time);
        if let Some(pattern) = update.recurrence {
            draft.recurrence = pattern;
        }
        draft.recurrence_day = update.recurrence_day.apply(draft.recurrence_day);

        draft.validate(limits)
    }
}
