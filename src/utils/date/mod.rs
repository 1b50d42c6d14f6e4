// Date utility functions
// Day keys, local-midnight truncation and time-of-day helpers shared by the engine

use std::fmt;

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// Number of minutes in the 24-hour column used for time layout.
pub const MINUTES_IN_DAY: u32 = 24 * 60;

/// Calendar-day identifier.
///
/// Built only from the year/month/day components of a date, so two instants
/// share a key exactly when they fall on the same local calendar day.
/// Displays as an ISO date (`2024-03-10`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Key of the local calendar day `instant` falls on.
    pub fn from_datetime(instant: &DateTime<Local>) -> Self {
        Self(instant.date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.0.year(), self.0.month(), self.0.day())
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

pub fn is_same_day(date1: DateTime<Local>, date2: DateTime<Local>) -> bool {
    date1.date_naive() == date2.date_naive()
}

/// Local midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> DateTime<Local> {
    resolve_local(&Local, date.and_time(chrono::NaiveTime::MIN))
}

/// Minutes elapsed since local midnight; seconds are ignored.
pub fn minutes_since_midnight(instant: &DateTime<Local>) -> u32 {
    instant.hour() * 60 + instant.minute()
}

/// Replaces the date components of `instant` with `date`, keeping hour,
/// minute and second. Sub-second fields are zeroed.
pub fn with_date<Tz: TimeZone>(instant: &DateTime<Tz>, date: NaiveDate) -> DateTime<Tz> {
    let time = instant.time();
    let time = time.with_nanosecond(0).unwrap_or(time);
    resolve_local(&instant.timezone(), date.and_time(time))
}

/// Maps a wall-clock time in `tz` to an instant.
///
/// Ambiguous times (clocks falling back) resolve to the earlier instant.
/// Times inside a spring-forward gap roll forward by one hour.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    if let Some(resolved) = tz.from_local_datetime(&naive).earliest() {
        return resolved;
    }

    let shifted = naive + Duration::hours(1);
    log::warn!(
        "Local time {} does not exist; rolling forward to {}",
        naive,
        shifted
    );
    tz.from_local_datetime(&shifted)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&naive))
}
