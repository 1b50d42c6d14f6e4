//! Drag-to-reschedule.
//!
//! Dropping an event on another day moves it to that day at the same
//! wall-clock start time and keeps its exact duration. Pointer tracking and
//! drag previews belong to the presentation layer; this module only holds
//! which event is being dragged and computes the new times.

use chrono::{DateTime, Duration, Local, NaiveDate};

use crate::models::event::{Event, EventPatch};
use crate::services::event::EventStore;
use crate::utils::date::with_date;

/// New start/end for an event dropped on `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reschedule {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl Reschedule {
    pub fn for_drop(event: &Event, target: NaiveDate) -> Self {
        let duration: Duration = event.end - event.start;
        let start = with_date(&event.start, target);
        Self {
            start,
            end: start + duration,
        }
    }

    pub fn into_patch(self) -> EventPatch {
        EventPatch::reschedule(self.start, self.end)
    }
}

/// Move the event `id` to `target`, touching only its start and end.
///
/// Returns the applied times, or `None` when `id` no longer exists.
pub fn reschedule(store: &mut EventStore, id: &str, target: NaiveDate) -> Option<Reschedule> {
    let Some(event) = store.get(id) else {
        log::debug!("Drop ignored: event {} no longer exists", id);
        return None;
    };

    let change = Reschedule::for_drop(event, target);
    store.update(id, change.into_patch());
    log::info!(
        "Rescheduled event {} to {} - {}",
        id,
        change.start.format("%Y-%m-%d %H:%M"),
        change.end.format("%Y-%m-%d %H:%M")
    );
    Some(change)
}

/// Which event, if any, is currently being dragged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    dragged: Option<String>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, event_id: impl Into<String>) {
        self.dragged = Some(event_id.into());
    }

    pub fn dragged_id(&self) -> Option<&str> {
        self.dragged.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn cancel(&mut self) {
        self.dragged = None;
    }

    /// Complete the drag on `target`, clearing the state. A drop without an
    /// active drag, or for an event deleted mid-drag, changes nothing.
    pub fn finish(&mut self, store: &mut EventStore, target: NaiveDate) -> Option<Reschedule> {
        let id = self.dragged.take()?;
        reschedule(store, &id, target)
    }
}
