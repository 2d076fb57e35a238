//! Ordering of task collections by a single criterion.

use crate::task::domain::{ParseTaskFieldError, Priority, Task};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Rank assigned to tasks without a priority.
const UNPRIORITISED_RANK: i8 = -1;

/// Key used to order a task collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortCriterion {
    /// Numeric identifier.
    Id,
    /// Title, ignoring case.
    Title,
    /// Priority rank; tasks without a priority rank lowest.
    Priority,
    /// Due date and time; undated tasks follow every dated task.
    DueDate,
    /// Creation timestamp.
    Created,
}

impl SortCriterion {
    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Priority => "priority",
            Self::DueDate => "due-date",
            Self::Created => "created",
        }
    }
}

impl TryFrom<&str> for SortCriterion {
    type Error = ParseTaskFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "priority" => Ok(Self::Priority),
            "due-date" | "due_date" | "due" => Ok(Self::DueDate),
            "created" | "created_at" => Ok(Self::Created),
            _ => Err(ParseTaskFieldError::new("sort criterion", value)),
        }
    }
}

impl FromStr for SortCriterion {
    type Err = ParseTaskFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sorts tasks by `criterion`.
///
/// The sort is stable: tasks with equal keys keep their input order in both
/// directions. Descending order reverses the key comparison. Undated tasks
/// sort last ascending and first when `descending` is set; tasks without a
/// priority rank lowest, so they come first ascending and last descending.
#[must_use]
pub fn sort_tasks(mut tasks: Vec<Task>, criterion: SortCriterion, descending: bool) -> Vec<Task> {
    match criterion {
        SortCriterion::Id => sort_by_key(&mut tasks, descending, Task::id),
        SortCriterion::Title => sort_by_key(&mut tasks, descending, |task| {
            task.title().to_lowercase()
        }),
        SortCriterion::Priority => sort_by_key(&mut tasks, descending, |task| {
            task.priority().map_or(UNPRIORITISED_RANK, Priority::rank)
        }),
        SortCriterion::DueDate => sort_by_key(&mut tasks, descending, |task| {
            let due = task.due_instant();
            (due.is_none(), due)
        }),
        SortCriterion::Created => sort_by_key(&mut tasks, descending, Task::created_at),
    }
    tasks
}

/// Parses `criterion` and sorts tasks by it.
///
/// # Errors
///
/// Returns [`ParseTaskFieldError`] when the criterion is not recognised.
pub fn sort_tasks_by(
    tasks: Vec<Task>,
    criterion: &str,
    descending: bool,
) -> Result<Vec<Task>, ParseTaskFieldError> {
    let parsed = SortCriterion::try_from(criterion)?;
    Ok(sort_tasks(tasks, parsed, descending))
}

fn sort_by_key<K, F>(tasks: &mut [Task], descending: bool, key: F)
where
    K: Ord,
    F: Fn(&Task) -> K,
{
    tasks.sort_by(|left, right| {
        let ordering: Ordering = key(left).cmp(&key(right));
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}
