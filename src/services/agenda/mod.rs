//! Agenda grouping and scroll windowing.
//!
//! The agenda lists upcoming events day by day. Each day group has a fixed
//! rendered height derived from [`AgendaMetrics`], and groups are stacked
//! top to bottom starting at offset zero. Large collections are virtualized:
//! only groups intersecting the scroll viewport are handed to the renderer.

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::models::settings::AgendaMetrics;
use crate::utils::date::DayKey;

/// Events of one day, earliest first.
#[derive(Debug, Clone, PartialEq)]
pub struct AgendaGroup {
    pub day: DayKey,
    pub events: Vec<Event>,
    pub height: f32,
}

impl AgendaGroup {
    pub fn date(&self) -> NaiveDate {
        self.day.date()
    }
}

/// A group together with its vertical position in the scroll content.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedGroup {
    pub group: AgendaGroup,
    pub offset: f32,
}

impl PlacedGroup {
    /// Half-open overlap test against `[scroll_offset, scroll_offset + height)`.
    pub fn intersects(&self, viewport: &Viewport) -> bool {
        self.offset + self.group.height > viewport.scroll_offset
            && self.offset < viewport.scroll_offset + viewport.height
    }
}

/// Current scroll state of the agenda container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub scroll_offset: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(scroll_offset: f32, height: f32) -> Self {
        Self {
            scroll_offset,
            height,
        }
    }
}

/// Groups to materialize for one viewport, plus the size of the scroll content.
#[derive(Debug, Clone, PartialEq)]
pub struct AgendaWindow<'a> {
    pub groups: Vec<&'a PlacedGroup>,
    pub total_height: f32,
}

/// Stacked day groups for every event on or after a reference day.
#[derive(Debug, Clone, PartialEq)]
pub struct AgendaLayout {
    groups: Vec<PlacedGroup>,
    total_height: f32,
    virtualized: bool,
}

impl AgendaLayout {
    /// Group `events` starting on or after `from`, in chronological order.
    ///
    /// Windowing is enabled when the number of `events` supplied (before the
    /// date cut) exceeds the metrics' virtualization threshold.
    pub fn build(events: &[Event], from: NaiveDate, metrics: &AgendaMetrics) -> Self {
        let virtualized = events.len() > metrics.virtualization_threshold;
        if virtualized {
            log::debug!(
                "Agenda virtualization active for {} events (threshold {})",
                events.len(),
                metrics.virtualization_threshold
            );
        }

        let mut groups = Vec::new();
        let mut offset = 0.0_f32;

        for (day, day_events) in group_by_day(events, from) {
            let height = metrics.group_height(day_events.len());
            groups.push(PlacedGroup {
                group: AgendaGroup {
                    day,
                    events: day_events,
                    height,
                },
                offset,
            });
            offset += height;
        }

        Self {
            groups,
            total_height: offset,
            virtualized,
        }
    }

    pub fn groups(&self) -> &[PlacedGroup] {
        &self.groups
    }

    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    pub fn is_virtualized(&self) -> bool {
        self.virtualized
    }

    /// No upcoming events; the caller shows an empty-state message.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn event_count(&self) -> usize {
        self.groups.iter().map(|placed| placed.group.events.len()).sum()
    }

    /// Groups to render for `viewport`. Without virtualization every group
    /// is returned regardless of scroll position.
    pub fn window(&self, viewport: Viewport) -> AgendaWindow<'_> {
        let groups = if self.virtualized {
            self.groups
                .iter()
                .filter(|placed| placed.intersects(&viewport))
                .collect()
        } else {
            self.groups.iter().collect()
        };

        AgendaWindow {
            groups,
            total_height: self.total_height,
        }
    }
}

/// Sort events by start, drop those before `from`, and split into per-day
/// buckets in date order. Events sharing a start keep their collection order.
pub fn group_by_day(events: &[Event], from: NaiveDate) -> Vec<(DayKey, Vec<Event>)> {
    let mut upcoming: Vec<&Event> = events
        .iter()
        .filter(|event| event.start.date_naive() >= from)
        .collect();
    upcoming.sort_by_key(|event| event.start);

    let mut groups: Vec<(DayKey, Vec<Event>)> = Vec::new();
    for event in upcoming {
        let day = DayKey::from_datetime(&event.start);
        match groups.last_mut() {
            Some((last_day, bucket)) if *last_day == day => bucket.push(event.clone()),
            _ => groups.push((day, vec![event.clone()])),
        }
    }
    groups
}
