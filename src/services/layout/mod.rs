//! Vertical placement of events inside a 24-hour day column.
//!
//! Positions are fractions of the column so any renderer can scale them to
//! its own pixel height. The column is the event's start day; callers must
//! only place events whose start and end fall on the same day. An end past
//! midnight yields a height computed from the raw minute difference, which
//! can be negative.

use chrono::{DateTime, Local};

use crate::models::event::Event;
use crate::utils::date::{minutes_since_midnight, MINUTES_IN_DAY};

pub const HOURS_IN_DAY: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventPosition {
    /// Distance from the top of the column, 0.0 at midnight.
    pub top: f32,
    /// Share of the column covered by the event.
    pub height: f32,
}

impl EventPosition {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Pixel `(top, height)` for a column `column_height` pixels tall.
    pub fn to_pixels(&self, column_height: f32) -> (f32, f32) {
        (self.top * column_height, self.height * column_height)
    }
}

pub fn position(event: &Event) -> EventPosition {
    position_for_span(&event.start, &event.end)
}

pub fn position_for_span(start: &DateTime<Local>, end: &DateTime<Local>) -> EventPosition {
    let start_minutes = minutes_since_midnight(start) as f32;
    let end_minutes = minutes_since_midnight(end) as f32;
    let day = MINUTES_IN_DAY as f32;

    EventPosition {
        top: start_minutes / day,
        height: (end_minutes - start_minutes) / day,
    }
}

/// Labels for the hour gutter: `12 AM`, `1 AM` ... `12 PM` ... `11 PM`.
pub fn hour_labels() -> Vec<String> {
    (0..HOURS_IN_DAY).map(hour_label).collect()
}

fn hour_label(hour: u32) -> String {
    match hour {
        0 => "12 AM".to_string(),
        1..=11 => format!("{} AM", hour),
        12 => "12 PM".to_string(),
        _ => format!("{} PM", hour - 12),
    }
}
