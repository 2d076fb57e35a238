//! Shared fixtures for integration tests.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a local wall-clock instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    local: NaiveDateTime,
}

impl FixedClock {
    /// Pins the clock to `local`.
    pub const fn at(local: NaiveDateTime) -> Self {
        Self { local }
    }

    /// Pins the clock to noon on `date`.
    pub fn noon_on(date: NaiveDate) -> Self {
        Self::at(date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        Local
            .from_local_datetime(&self.local)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&self.local))
    }

    fn utc(&self) -> DateTime<Utc> {
        self.local().with_timezone(&Utc)
    }
}

/// Builds a calendar date.
///
/// # Panics
///
/// Panics when the components do not form a valid date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
}
