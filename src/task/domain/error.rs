//! Error types for task domain validation and parsing.

use super::RecurrencePattern;
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
///
/// Every variant is a recoverable validation failure carrying a
/// human-readable reason.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the configured limit.
    #[error("task title is {length} characters, maximum is {max}")]
    TitleTooLong {
        /// Observed title length in characters.
        length: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The task description exceeds the configured limit.
    #[error("task description is {length} characters, maximum is {max}")]
    DescriptionTooLong {
        /// Observed description length in characters.
        length: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The task carries more tags than allowed.
    #[error("task has {count} tags, maximum is {max}")]
    TooManyTags {
        /// Observed tag count.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A tag is empty after trimming.
    #[error("tags must not be empty")]
    EmptyTag,

    /// A tag exceeds the configured length limit.
    #[error("tag '{tag}' exceeds {max} characters")]
    TagTooLong {
        /// The offending tag.
        tag: String,
        /// Configured maximum.
        max: usize,
    },

    /// A weekly or monthly recurrence was given without a day selector.
    #[error("{0} recurrence requires a recurrence day")]
    MissingRecurrenceDay(RecurrencePattern),

    /// The recurrence day lies outside the range allowed for the pattern.
    #[error("{pattern} recurrence day must be between 1 and {max}, got {day}")]
    RecurrenceDayOutOfRange {
        /// Pattern the day was supplied for.
        pattern: RecurrencePattern,
        /// Supplied day.
        day: u8,
        /// Largest accepted day for the pattern.
        max: u8,
    },

    /// A recurring task was created without a due date.
    #[error("recurring tasks require a due date")]
    RecurrenceRequiresDueDate,

    /// A next occurrence was requested for a non-recurring task.
    #[error("task does not recur")]
    NotRecurring,

    /// The year, month, and day do not form a calendar date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Calendar year.
        year: i32,
        /// Calendar month.
        month: u32,
        /// Day of month.
        day: u32,
    },

    /// Date arithmetic left the representable range.
    #[error("date arithmetic overflowed the supported calendar range")]
    DateOutOfRange,

    /// The task identifier is zero.
    #[error("task identifier must be a positive integer")]
    InvalidTaskId,

    /// A boundary token could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseTaskFieldError),
}

/// Error returned while parsing textual field values at the boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {field}: '{value}'")]
pub struct ParseTaskFieldError {
    /// Name of the field being parsed.
    pub field: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseTaskFieldError {
    /// Creates a parse error for the named field.
    #[must_use]
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}
