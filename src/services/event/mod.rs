//! Calendar event service entry point.
//! Owns the authoritative event collection and the day index derived from it,
//! organized across focused submodules.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Local;

use crate::models::event::Event;

pub mod crud;
pub mod index;
pub mod queries;

pub use index::{EventIndex, IndexCache};
pub use queries::matches_title;

static NEXT_EVENT_SEQ: AtomicU64 = AtomicU64::new(1);

/// The single authoritative, ordered collection of events.
///
/// Every mutation goes through [`create`](EventStore::create),
/// [`update`](EventStore::update) or [`delete`](EventStore::delete) and bumps
/// [`version`](EventStore::version), which derived views use to notice change.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
    version: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with events that already carry identifiers.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self { events, version: 0 }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    fn touch(&mut self) {
        self.version += 1;
    }
}

/// Identifier of the form `evt-<unix millis>-<sequence>`.
pub(crate) fn generate_event_id() -> String {
    let seq = NEXT_EVENT_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("evt-{}-{}", Local::now().timestamp_millis(), seq)
}
