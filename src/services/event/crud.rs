use super::{generate_event_id, EventStore};
use crate::models::event::{Event, EventDraft, EventPatch};

impl EventStore {
    /// Assign an identifier to `draft` and append it to the collection.
    ///
    /// The draft is expected to have passed [`EventDraft::validate`].
    pub fn create(&mut self, draft: EventDraft) -> &Event {
        let event = Event::from_draft(generate_event_id(), draft);
        log::debug!("Created event {} ('{}')", event.id, event.title);

        self.events.push(event);
        self.touch();
        &self.events[self.events.len() - 1]
    }

    /// Merge `patch` into the event with `id`.
    ///
    /// Returns `false` without touching the collection when no event matches,
    /// which happens routinely when the UI holds a stale reference.
    pub fn update(&mut self, id: &str, patch: EventPatch) -> bool {
        match self.events.iter_mut().find(|event| event.id == id) {
            Some(event) => {
                event.apply(patch);
                self.touch();
                true
            }
            None => {
                log::debug!("Ignoring update for unknown event {}", id);
                false
            }
        }
    }

    /// Remove the event with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);

        if self.events.len() == before {
            log::debug!("Ignoring delete for unknown event {}", id);
            return false;
        }

        self.touch();
        true
    }
}
