//! Domain model for personal task tracking.
//!
//! The task domain owns field validation, due-status derivation, and
//! recurrence arithmetic while keeping storage concerns outside of the domain
//! boundary.

mod details;
mod due;
mod error;
mod ids;
mod limits;
mod parse;
mod priority;
mod recurrence;
mod task;
mod update;

pub use details::{TaskDetails, TaskDraft};
pub use due::{DueStatus, NO_DUE_DATE_LABEL};
pub use error::{ParseTaskFieldError, TaskDomainError};
pub use ids::TaskId;
pub use limits::TaskLimits;
pub use parse::{parse_due_date, parse_due_time, parse_recurrence_day, parse_tags};
pub use priority::Priority;
pub use recurrence::{
    RecurrencePattern, RecurrenceRule, days_in_month, next_occurrence, safe_date,
};
pub use task::Task;
pub use update::{FieldUpdate, TaskUpdate};
