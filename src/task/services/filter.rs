//! Conjunctive filtering of task collections.

use crate::task::domain::{ParseTaskFieldError, Priority, Task};
use std::fmt;
use std::str::FromStr;

/// Completion state used as a filter criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionStatus {
    /// Only completed tasks.
    Complete,
    /// Only open tasks.
    Incomplete,
}

impl CompletionStatus {
    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Incomplete => "incomplete",
        }
    }

    const fn matches(self, is_complete: bool) -> bool {
        match self {
            Self::Complete => is_complete,
            Self::Incomplete => !is_complete,
        }
    }
}

impl TryFrom<&str> for CompletionStatus {
    type Error = ParseTaskFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "complete" => Ok(Self::Complete),
            "incomplete" => Ok(Self::Incomplete),
            _ => Err(ParseTaskFieldError::new("status", value)),
        }
    }
}

impl FromStr for CompletionStatus {
    type Err = ParseTaskFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Criteria combined with logical AND; unset criteria match every task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFilter {
    keyword: Option<String>,
    status: Option<CompletionStatus>,
    priority: Option<Priority>,
    tag: Option<String>,
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires a case-insensitive substring match in title or description.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into().to_lowercase());
        self
    }

    /// Requires the given completion state.
    #[must_use]
    pub const fn with_status(mut self, status: CompletionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Requires the given priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Requires a tag exactly equal to `tag`.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Returns `true` when `task` satisfies every configured criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.keyword_matches(task)
            && self.status.is_none_or(|status| status.matches(task.is_complete()))
            && self
                .priority
                .is_none_or(|priority| task.priority() == Some(priority))
            && self
                .tag
                .as_ref()
                .is_none_or(|tag| task.tags().iter().any(|candidate| candidate == tag))
    }

    fn keyword_matches(&self, task: &Task) -> bool {
        let Some(keyword) = self.keyword.as_deref() else {
            return true;
        };
        task.title().to_lowercase().contains(keyword)
            || task
                .description()
                .is_some_and(|text| text.to_lowercase().contains(keyword))
    }
}

/// Returns the tasks matching `filter`, preserving their relative order.
#[must_use]
pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect()
}
