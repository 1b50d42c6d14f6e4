//! Search term debouncing.
//!
//! Keystrokes update the raw text immediately, but the term used for
//! filtering only changes once typing has paused for the debounce window.
//! Only the trailing edge fires. Time is passed in by the caller so the
//! debouncer stays deterministic.

use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    window: Duration,
    raw: String,
    settled: String,
    last_input: Option<Instant>,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl SearchDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            raw: String::new(),
            settled: String::new(),
            last_input: None,
        }
    }

    /// Record the latest contents of the search box.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        if text == self.raw && self.last_input.is_none() {
            return;
        }
        self.raw = text;
        self.last_input = Some(now);
    }

    /// Returns the new filter term once the window has elapsed since the
    /// last keystroke. Fires at most once per pause, and not at all when the
    /// text ended up unchanged.
    pub fn poll(&mut self, now: Instant) -> Option<&str> {
        let last = self.last_input?;
        if now.saturating_duration_since(last) < self.window {
            return None;
        }

        self.last_input = None;
        if self.raw == self.settled {
            return None;
        }

        self.settled = self.raw.clone();
        log::debug!("Search term settled: '{}'", self.settled);
        Some(self.settled.as_str())
    }

    /// Whether a keystroke is waiting for the window to elapse.
    pub fn is_pending(&self) -> bool {
        self.last_input.is_some()
    }

    /// Term currently applied to the event index.
    pub fn settled(&self) -> &str {
        &self.settled
    }

    /// Text as typed, possibly not yet applied.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}
