// Event module
// Calendar event model, creation drafts and partial updates

use chrono::{DateTime, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::start_of_day;

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Swatches offered by the event editor. The first one is the default.
pub const PRESET_COLORS: [&str; 6] = [
    "#2563eb", // blue
    "#047857", // emerald
    "#d97706", // amber
    "#7c3aed", // violet
    "#dc2626", // red
    "#be185d", // pink
];

pub const PRESET_CATEGORIES: [&str; 6] =
    ["Work", "Personal", "Meeting", "Design", "Holiday", "Other"];

/// Calendar event held by the event store.
///
/// `end > start` is a precondition established by draft validation; the
/// engine does not re-check it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Event {
    /// Attach an identifier to a draft.
    pub fn from_draft(id: impl Into<String>, draft: EventDraft) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            description: draft.description,
            start: draft.start,
            end: draft.end,
            color: draft.color,
            category: draft.category,
        }
    }

    /// Get the duration of the event
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Merge the fields present in `patch`; absent fields stay untouched.
    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(start) = patch.start {
            self.start = start;
        }
        if let Some(end) = patch.end {
            self.end = end;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }
}

/// Reasons an editor form can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required.")]
    EmptyTitle,
    #[error("Title cannot exceed 100 characters.")]
    TitleTooLong,
    #[error("Description cannot exceed 500 characters.")]
    DescriptionTooLong,
    #[error("End date must be after start date.")]
    EndNotAfterStart,
    #[error("Color must be in hex format (#RRGGBB or #RGB)")]
    InvalidColor,
}

/// An event that has not been given an identifier yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl EventDraft {
    pub fn new(title: impl Into<String>, start: DateTime<Local>, end: DateTime<Local>) -> Self {
        Self {
            title: title.into(),
            description: None,
            start,
            end,
            color: None,
            category: None,
        }
    }

    /// Draft opened by clicking a day cell: starts at local midnight and
    /// lasts `duration`, with the default swatch selected.
    pub fn for_day(date: NaiveDate, duration: Duration) -> Self {
        Self::for_instant(start_of_day(date), duration)
    }

    pub fn for_instant(start: DateTime<Local>, duration: Duration) -> Self {
        Self {
            color: Some(PRESET_COLORS[0].to_string()),
            ..Self::new(String::new(), start, start + duration)
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Form-level checks performed before a draft reaches the store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TitleTooLong);
        }
        if self
            .description
            .as_ref()
            .is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_LEN)
        {
            return Err(ValidationError::DescriptionTooLong);
        }
        if self.end <= self.start {
            return Err(ValidationError::EndNotAfterStart);
        }
        if let Some(ref color) = self.color {
            if !is_hex_color(color) {
                return Err(ValidationError::InvalidColor);
            }
        }
        Ok(())
    }
}

impl From<Event> for EventDraft {
    fn from(event: Event) -> Self {
        Self {
            title: event.title,
            description: event.description,
            start: event.start,
            end: event.end,
            color: event.color,
            category: event.category,
        }
    }
}

/// Partial update. `None` leaves a field alone; for optional fields
/// `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub start: Option<DateTime<Local>>,
    pub end: Option<DateTime<Local>>,
    pub color: Option<Option<String>>,
    pub category: Option<Option<String>>,
}

impl EventPatch {
    pub fn reschedule(start: DateTime<Local>, end: DateTime<Local>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }

    /// Patch carrying every editable field of `draft`.
    pub fn from_draft(draft: EventDraft) -> Self {
        Self {
            title: Some(draft.title),
            description: Some(draft.description),
            start: Some(draft.start),
            end: Some(draft.end),
            color: Some(draft.color),
            category: Some(draft.category),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) if hex.len() == 3 || hex.len() == 6 => {
            hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        _ => false,
    }
}
