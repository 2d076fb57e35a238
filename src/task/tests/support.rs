//! Shared helpers for task unit tests.

use crate::task::domain::{Task, TaskDraft, TaskId, TaskLimits};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a local wall-clock instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    local: NaiveDateTime,
}

impl FixedClock {
    pub const fn at(local: NaiveDateTime) -> Self {
        Self { local }
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        Local
            .from_local_datetime(&self.local)
            .earliest()
            .expect("fixed local time should exist")
    }

    fn utc(&self) -> DateTime<Utc> {
        self.local().with_timezone(&Utc)
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time of day")
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day).and_time(time(hour, minute))
}

pub fn id(value: u64) -> TaskId {
    TaskId::new(value).expect("positive task id")
}

/// Builds a task from a draft using the standard limits.
pub fn build_task(raw_id: u64, draft: TaskDraft, clock: &impl Clock) -> Task {
    let details = draft
        .validate(&TaskLimits::default())
        .expect("draft should be valid");
    Task::new(id(raw_id), details, clock)
}
