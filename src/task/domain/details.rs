//! Raw and validated task field sets.

use super::{Priority, RecurrencePattern, RecurrenceRule, TaskDomainError, TaskLimits};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Unvalidated field values for a new task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) priority: Option<Priority>,
    pub(crate) tags: Vec<String>,
    pub(crate) due_date: Option<NaiveDate>,
    pub(crate) due_time: Option<NaiveTime>,
    pub(crate) recurrence: RecurrencePattern,
    pub(crate) recurrence_day: Option<u8>,
}

impl TaskDraft {
    /// Creates a draft with the required title and every optional field
    /// unset.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the due time.
    #[must_use]
    pub const fn with_due_time(mut self, due_time: NaiveTime) -> Self {
        self.due_time = Some(due_time);
        self
    }

    /// Sets the recurrence pattern and its optional day selector.
    #[must_use]
    pub const fn with_recurrence(mut self, pattern: RecurrencePattern, day: Option<u8>) -> Self {
        self.recurrence = pattern;
        self.recurrence_day = day;
        self
    }

    /// Returns `true` when the draft asks for a repeating task.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        !matches!(self.recurrence, RecurrencePattern::None)
    }

    /// Returns `true` when a due date has been supplied.
    #[must_use]
    pub const fn has_due_date(&self) -> bool {
        self.due_date.is_some()
    }

    /// Validates every field and produces a [`TaskDetails`].
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskDomainError`] encountered among title,
    /// description, tags, and recurrence checks.
    pub fn validate(self, limits: &TaskLimits) -> Result<TaskDetails, TaskDomainError> {
        let title = validate_title(&self.title, limits)?;
        let description = validate_description(self.description.as_deref(), limits)?;
        let tags = validate_tags(&self.tags, limits)?;
        let recurrence = RecurrenceRule::from_parts(self.recurrence, self.recurrence_day)?;

        Ok(TaskDetails {
            title,
            description,
            priority: self.priority,
            tags,
            due_date: self.due_date,
            due_time: self.due_time,
            recurrence,
        })
    }
}

/// Validated user-editable task fields.
///
/// Deserialized values are revalidated against [`TaskLimits::STANDARD`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredTaskDetails")]
pub struct TaskDetails {
    title: String,
    description: Option<String>,
    priority: Option<Priority>,
    tags: Vec<String>,
    due_date: Option<NaiveDate>,
    due_time: Option<NaiveTime>,
    recurrence: RecurrenceRule,
}

impl TaskDetails {
    /// Returns the trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the tags in insertion order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the due time, if any.
    #[must_use]
    pub const fn due_time(&self) -> Option<NaiveTime> {
        self.due_time
    }

    /// Returns the recurrence rule.
    #[must_use]
    pub const fn recurrence(&self) -> RecurrenceRule {
        self.recurrence
    }

    /// Converts the validated fields back into a draft for re-validation.
    pub(crate) fn into_draft(self) -> TaskDraft {
        TaskDraft {
            title: self.title,
            description: self.description,
            priority: self.priority,
            tags: self.tags,
            due_date: self.due_date,
            due_time: self.due_time,
            recurrence: self.recurrence.pattern(),
            recurrence_day: self.recurrence.day(),
        }
    }
}

/// Wire shape of [`TaskDetails`] before validation.
#[derive(Deserialize)]
struct StoredTaskDetails {
    title: String,
    description: Option<String>,
    priority: Option<Priority>,
    tags: Vec<String>,
    due_date: Option<NaiveDate>,
    due_time: Option<NaiveTime>,
    recurrence: RecurrenceRule,
}

impl TryFrom<StoredTaskDetails> for TaskDetails {
    type Error = TaskDomainError;

    fn try_from(stored: StoredTaskDetails) -> Result<Self, Self::Error> {
        TaskDraft {
            title: stored.title,
            description: stored.description,
            priority: stored.priority,
            tags: stored.tags,
            due_date: stored.due_date,
            due_time: stored.due_time,
            recurrence: stored.recurrence.pattern(),
            recurrence_day: stored.recurrence.day(),
        }
        .validate(&TaskLimits::STANDARD)
    }
}

fn validate_title(raw: &str, limits: &TaskLimits) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    let length = trimmed.chars().count();
    if length > limits.max_title_length {
        return Err(TaskDomainError::TitleTooLong {
            length,
            max: limits.max_title_length,
        });
    }
    Ok(trimmed.to_owned())
}

fn validate_description(
    raw: Option<&str>,
    limits: &TaskLimits,
) -> Result<Option<String>, TaskDomainError> {
    let Some(trimmed) = raw.map(str::trim).filter(|text| !text.is_empty()) else {
        return Ok(None);
    };
    let length = trimmed.chars().count();
    if length > limits.max_description_length {
        return Err(TaskDomainError::DescriptionTooLong {
            length,
            max: limits.max_description_length,
        });
    }
    Ok(Some(trimmed.to_owned()))
}

fn validate_tags(raw: &[String], limits: &TaskLimits) -> Result<Vec<String>, TaskDomainError> {
    if raw.len() > limits.max_tags {
        return Err(TaskDomainError::TooManyTags {
            count: raw.len(),
            max: limits.max_tags,
        });
    }
    raw.iter()
        .map(|tag| validate_tag(tag, limits))
        .collect()
}

fn validate_tag(raw: &str, limits: &TaskLimits) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTag);
    }
    if trimmed.chars().count() > limits.max_tag_length {
        return Err(TaskDomainError::TagTooLong {
            tag: trimmed.to_owned(),
            max: limits.max_tag_length,
        });
    }
    Ok(trimmed.to_owned())
}
