//! Day index over the event collection.
//!
//! Events are bucketed under the day their start instant falls on. An event
//! that runs past midnight is still indexed under its start day only; month
//! and week cells show it once, on the day it begins.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::queries::title_matches;
use super::EventStore;
use crate::models::event::Event;
use crate::utils::date::DayKey;

/// Mapping from day to the events starting on it, each list sorted by start.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventIndex {
    days: HashMap<DayKey, Vec<Event>>,
}

impl EventIndex {
    /// Full rebuild from `events`, keeping only titles that contain `filter`
    /// (case-insensitive; empty filter keeps everything).
    pub fn build<'a, I>(events: I, filter: &str) -> Self
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let needle = filter.to_lowercase();
        let mut days: HashMap<DayKey, Vec<Event>> = HashMap::new();

        for event in events {
            if !title_matches(event, &needle) {
                continue;
            }
            days.entry(DayKey::from_datetime(&event.start))
                .or_default()
                .push(event.clone());
        }

        for day_events in days.values_mut() {
            day_events.sort_by_key(|event| event.start);
        }

        log::debug!(
            "Built day index: {} events across {} days (filter '{}')",
            days.values().map(Vec::len).sum::<usize>(),
            days.len(),
            filter
        );

        Self { days }
    }

    /// Events starting on `date`, earliest first. Empty when there are none.
    pub fn events_for_day(&self, date: NaiveDate) -> &[Event] {
        self.days
            .get(&DayKey::from_date(date))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn event_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

/// Memoizes the last index built for a given store version and filter.
#[derive(Debug, Default)]
pub struct IndexCache {
    key: Option<(u64, String)>,
    index: EventIndex,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index for the store's current version and `filter`, rebuilding only
    /// when either changed since the previous call.
    pub fn get(&mut self, store: &EventStore, filter: &str) -> &EventIndex {
        let fresh = matches!(
            &self.key,
            Some((version, cached_filter)) if *version == store.version() && cached_filter == filter
        );

        if !fresh {
            self.index = EventIndex::build(store.list_all(), filter);
            self.key = Some((store.version(), filter.to_string()));
        }

        &self.index
    }
}
