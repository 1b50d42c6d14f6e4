// Test fixtures - reusable test data
// Provides consistent dates and event collections across integration tests

#![allow(dead_code)]

use calendar_engine::models::event::{Event, EventDraft};
use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    pub fn local(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .unwrap()
    }

    /// Returns Mar 10, 2024 at 09:00
    pub fn standup_start() -> DateTime<Local> {
        local(2024, 3, 10, 9, 0)
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn event(id: &str, title: &str, start: DateTime<Local>, minutes: i64) -> Event {
        Event::from_draft(
            id,
            EventDraft::new(title, start, start + Duration::minutes(minutes)),
        )
    }

    /// The half-hour standup `e1` on 2024-03-10 09:00
    pub fn standup() -> Event {
        event("e1", "Standup", dates::standup_start(), 30)
    }

    /// 25 events spread over June 1-10, 2024: three per day for the first
    /// five days, two per day afterwards.
    pub fn busy_fortnight() -> Vec<Event> {
        let mut events = Vec::new();
        for day in 1..=10u32 {
            let per_day = if day <= 5 { 3 } else { 2 };
            for slot in 0..per_day {
                let start = dates::local(2024, 6, day, 9 + slot, 0);
                events.push(event(&format!("d{day}-{slot}"), "Busy", start, 45));
            }
        }
        events
    }
}
