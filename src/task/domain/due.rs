//! Due-date classification and rendering.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Label shown for tasks without a due date.
pub const NO_DUE_DATE_LABEL: &str = "No due date";

/// Urgency classification of a task relative to the current moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    /// The task has no due date.
    NoDueDate,
    /// The task is incomplete and its deadline has passed.
    Overdue,
    /// The task is due today.
    DueToday,
    /// Any other dated task.
    Upcoming,
}

impl DueStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoDueDate => "no_due_date",
            Self::Overdue => "overdue",
            Self::DueToday => "due_today",
            Self::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deadline of a task: a date with an optional time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Deadline {
    pub(crate) date: Option<NaiveDate>,
    pub(crate) time: Option<NaiveTime>,
}

impl Deadline {
    /// Date-only deadlines lapse once the date is before today; timed
    /// deadlines lapse once the instant is before `now`.
    pub(crate) fn has_passed(self, now: NaiveDateTime) -> bool {
        let Some(date) = self.date else {
            return false;
        };
        self.time
            .map_or_else(|| date < now.date(), |time| date.and_time(time) < now)
    }

    pub(crate) fn status(self, is_complete: bool, now: NaiveDateTime) -> DueStatus {
        let Some(date) = self.date else {
            return DueStatus::NoDueDate;
        };
        if !is_complete && self.has_passed(now) {
            DueStatus::Overdue
        } else if date == now.date() {
            DueStatus::DueToday
        } else {
            DueStatus::Upcoming
        }
    }

    /// A time without a date renders as undated.
    pub(crate) fn display(self) -> String {
        match (self.date, self.time) {
            (None, _) => NO_DUE_DATE_LABEL.to_owned(),
            (Some(date), None) => date.format(DATE_FORMAT).to_string(),
            (Some(date), Some(time)) => date.and_time(time).format(DATE_TIME_FORMAT).to_string(),
        }
    }

    /// Midnight stands in for a missing time.
    pub(crate) fn instant(self) -> Option<NaiveDateTime> {
        self.date
            .map(|date| date.and_time(self.time.unwrap_or_default()))
    }
}
