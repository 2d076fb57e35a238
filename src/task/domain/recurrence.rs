//! Recurrence rules and next-occurrence date arithmetic.
//!
//! All calculations operate on naive calendar dates. Every recurring pattern
//! yields a date strictly after the input date; monthly rules clamp the
//! requested day of month to the length of the target month.

use super::{ParseTaskFieldError, TaskDomainError};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DAYS_PER_WEEK: u32 = 7;
const MAX_WEEKDAY: u8 = 7;
const MAX_DAY_OF_MONTH: u8 = 31;
const DECEMBER: u32 = 12;

/// Recurrence pattern names as accepted at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrencePattern {
    /// The task does not repeat.
    #[default]
    None,
    /// The task repeats every day.
    Daily,
    /// The task repeats on one weekday each week.
    Weekly,
    /// The task repeats on one day each month.
    Monthly,
}

impl RecurrencePattern {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl TryFrom<&str> for RecurrencePattern {
    type Error = ParseTaskFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "none" => Ok(Self::None),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(ParseTaskFieldError::new("recurrence", value)),
        }
    }
}

impl FromStr for RecurrencePattern {
    type Err = ParseTaskFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated recurrence rule: a pattern together with its day selector.
///
/// Deserialization runs the same day-range checks as
/// [`RecurrenceRule::from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(
    tag = "pattern",
    rename_all = "snake_case",
    try_from = "StoredRecurrenceRule"
)]
pub enum RecurrenceRule {
    /// The task does not repeat.
    #[default]
    Never,
    /// Repeats every day.
    Daily,
    /// Repeats weekly on `day`, where 1 is Monday and 7 is Sunday.
    Weekly {
        /// ISO weekday number.
        day: u8,
    },
    /// Repeats monthly on `day`, clamped to the month's length.
    Monthly {
        /// Day of month.
        day: u8,
    },
}

impl RecurrenceRule {
    /// Builds a rule from a pattern and an optional day selector.
    ///
    /// The day is ignored for [`RecurrencePattern::None`] and
    /// [`RecurrencePattern::Daily`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingRecurrenceDay`] when a weekly or
    /// monthly pattern has no day, or
    /// [`TaskDomainError::RecurrenceDayOutOfRange`] when the day lies outside
    /// 1-7 (weekly) or 1-31 (monthly).
    pub fn from_parts(pattern: RecurrencePattern, day: Option<u8>) -> Result<Self, TaskDomainError> {
        match pattern {
            RecurrencePattern::None => Ok(Self::Never),
            RecurrencePattern::Daily => Ok(Self::Daily),
            RecurrencePattern::Weekly => {
                check_day(pattern, day, MAX_WEEKDAY).map(|valid| Self::Weekly { day: valid })
            }
            RecurrencePattern::Monthly => check_day(pattern, day, MAX_DAY_OF_MONTH)
                .map(|valid| Self::Monthly { day: valid }),
        }
    }

    /// Returns the pattern component of the rule.
    #[must_use]
    pub const fn pattern(self) -> RecurrencePattern {
        match self {
            Self::Never => RecurrencePattern::None,
            Self::Daily => RecurrencePattern::Daily,
            Self::Weekly { .. } => RecurrencePattern::Weekly,
            Self::Monthly { .. } => RecurrencePattern::Monthly,
        }
    }

    /// Returns the day selector, present only for weekly and monthly rules.
    #[must_use]
    pub const fn day(self) -> Option<u8> {
        match self {
            Self::Never | Self::Daily => None,
            Self::Weekly { day } | Self::Monthly { day } => Some(day),
        }
    }

    /// Returns `true` unless the rule is [`RecurrenceRule::Never`].
    #[must_use]
    pub const fn is_recurring(self) -> bool {
        !matches!(self, Self::Never)
    }

    /// Computes the next occurrence strictly after `current`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotRecurring`] for
    /// [`RecurrenceRule::Never`] and [`TaskDomainError::DateOutOfRange`] if
    /// the result cannot be represented.
    pub fn next_after(self, current: NaiveDate) -> Result<NaiveDate, TaskDomainError> {
        match self {
            Self::Never => Err(TaskDomainError::NotRecurring),
            Self::Daily => current.succ_opt().ok_or(TaskDomainError::DateOutOfRange),
            Self::Weekly { day } => next_weekly(current, u32::from(day)),
            Self::Monthly { day } => next_monthly(current, u32::from(day)),
        }
    }
}

/// Wire shape of [`RecurrenceRule`] before its day is range-checked.
#[derive(Deserialize)]
#[serde(tag = "pattern", rename_all = "snake_case")]
enum StoredRecurrenceRule {
    Never,
    Daily,
    Weekly { day: u8 },
    Monthly { day: u8 },
}

impl TryFrom<StoredRecurrenceRule> for RecurrenceRule {
    type Error = TaskDomainError;

    fn try_from(stored: StoredRecurrenceRule) -> Result<Self, Self::Error> {
        match stored {
            StoredRecurrenceRule::Never => Ok(Self::Never),
            StoredRecurrenceRule::Daily => Ok(Self::Daily),
            StoredRecurrenceRule::Weekly { day } => {
                Self::from_parts(RecurrencePattern::Weekly, Some(day))
            }
            StoredRecurrenceRule::Monthly { day } => {
                Self::from_parts(RecurrencePattern::Monthly, Some(day))
            }
        }
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern())?;
        if let Some(day) = self.day() {
            write!(f, " ({day})")?;
        }
        Ok(())
    }
}

fn check_day(pattern: RecurrencePattern, day: Option<u8>, max: u8) -> Result<u8, TaskDomainError> {
    match day {
        None => Err(TaskDomainError::MissingRecurrenceDay(pattern)),
        Some(value) if value == 0 || value > max => {
            Err(TaskDomainError::RecurrenceDayOutOfRange {
                pattern,
                day: value,
                max,
            })
        }
        Some(value) => Ok(value),
    }
}

/// Computes the next occurrence of a recurrence pattern after `current`.
///
/// # Errors
///
/// Returns [`TaskDomainError::NotRecurring`] for
/// [`RecurrencePattern::None`], the errors of
/// [`RecurrenceRule::from_parts`] for a missing or out-of-range day, and
/// [`TaskDomainError::DateOutOfRange`] on calendar overflow.
pub fn next_occurrence(
    current: NaiveDate,
    pattern: RecurrencePattern,
    recurrence_day: Option<u8>,
) -> Result<NaiveDate, TaskDomainError> {
    RecurrenceRule::from_parts(pattern, recurrence_day)?.next_after(current)
}

/// Builds a date, clamping `day` to the last valid day of the month.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDate`] when `month` is outside 1-12 or
/// `day` is zero, and [`TaskDomainError::DateOutOfRange`] when the year is
/// outside the supported calendar range.
pub fn safe_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, TaskDomainError> {
    let invalid = TaskDomainError::InvalidDate { year, month, day };
    if day == 0 || !(1..=DECEMBER).contains(&month) {
        return Err(invalid);
    }
    let last_day = days_in_month(year, month)?;
    NaiveDate::from_ymd_opt(year, month, day.min(last_day)).ok_or(invalid)
}

/// Returns the number of days in the given month.
///
/// # Errors
///
/// Returns [`TaskDomainError::DateOutOfRange`] when the month cannot be
/// represented.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, TaskDomainError> {
    let (next_year, next_month) = following_month(year, month)?;
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .ok_or(TaskDomainError::DateOutOfRange)
}

fn following_month(year: i32, month: u32) -> Result<(i32, u32), TaskDomainError> {
    if month >= DECEMBER {
        let next_year = year.checked_add(1).ok_or(TaskDomainError::DateOutOfRange)?;
        return Ok((next_year, 1));
    }
    Ok((year, month + 1))
}

fn next_weekly(current: NaiveDate, target: u32) -> Result<NaiveDate, TaskDomainError> {
    let today = current.weekday().number_from_monday();
    let days_ahead = if target > today {
        target - today
    } else {
        DAYS_PER_WEEK - today + target
    };
    current
        .checked_add_days(Days::new(u64::from(days_ahead)))
        .ok_or(TaskDomainError::DateOutOfRange)
}

fn next_monthly(current: NaiveDate, day: u32) -> Result<NaiveDate, TaskDomainError> {
    if day > current.day() {
        if let Some(this_month) = NaiveDate::from_ymd_opt(current.year(), current.month(), day) {
            return Ok(this_month);
        }
    }
    let (year, month) = following_month(current.year(), current.month())?;
    safe_date(year, month, day)
}
