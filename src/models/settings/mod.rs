// Settings module
// Tunables for agenda sizing, search debouncing and new-event defaults

use serde::{Deserialize, Serialize};

use crate::models::ui::ViewMode;

/// Fixed pixel sizes used to lay out agenda day groups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgendaMetrics {
    pub header_height: f32,
    pub item_height: f32,
    pub group_spacing: f32,
    /// Windowing only kicks in when the event count exceeds this value.
    pub virtualization_threshold: usize,
}

impl Default for AgendaMetrics {
    fn default() -> Self {
        Self {
            header_height: 48.0,
            item_height: 88.0,
            group_spacing: 24.0,
            virtualization_threshold: 20,
        }
    }
}

impl AgendaMetrics {
    pub fn group_height(&self, event_count: usize) -> f32 {
        self.header_height + event_count as f32 * self.item_height + self.group_spacing
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_view: ViewMode,
    pub search_debounce_ms: u64,
    pub default_event_minutes: i64,
    pub agenda: AgendaMetrics,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_view: ViewMode::Month,
            search_debounce_ms: 300,
            default_event_minutes: 60,
            agenda: AgendaMetrics::default(),
        }
    }
}

impl Settings {
    pub fn search_debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.search_debounce_ms)
    }

    pub fn default_event_duration(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.default_event_minutes)
    }
}
