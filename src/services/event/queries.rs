use super::EventStore;
use crate::models::event::Event;

impl EventStore {
    /// Every event in insertion order.
    pub fn list_all(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events whose title contains `query`, ignoring case. An empty query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<&Event> {
        let needle = query.to_lowercase();
        self.events
            .iter()
            .filter(|event| title_matches(event, &needle))
            .collect()
    }
}

/// True when `term` occurs in the event title, ignoring case. Descriptions
/// are not searched; an empty term matches every event.
pub fn matches_title(event: &Event, term: &str) -> bool {
    title_matches(event, &term.to_lowercase())
}

/// `needle` must already be lowercased.
pub(crate) fn title_matches(event: &Event, needle: &str) -> bool {
    needle.is_empty() || event.title.to_lowercase().contains(needle)
}
