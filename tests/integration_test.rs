// Integration tests for the scheduling and layout engine
mod fixtures;

use calendar_engine::models::event::{EventDraft, EventPatch, PRESET_CATEGORIES};
use calendar_engine::models::settings::AgendaMetrics;
use calendar_engine::services::agenda::{AgendaLayout, Viewport};
use calendar_engine::services::drag::{reschedule, DragState};
use calendar_engine::services::event::{EventIndex, EventStore, IndexCache};
use calendar_engine::services::grid::{month_grid, week_grid};
use calendar_engine::services::layout::position;
use calendar_engine::services::navigation::{move_focus, GridKey, NavigationState};
use calendar_engine::services::search::SearchDebouncer;
use calendar_engine::{Settings, ViewMode};
use chrono::Duration;
use fixtures::{dates, events};
use pretty_assertions::assert_eq;
use std::time::{Duration as StdDuration, Instant};

#[test]
fn test_month_scenario_with_single_event() {
    let store = EventStore::with_events(vec![events::standup()]);

    let grid = month_grid(dates::ymd(2024, 3, 15));
    assert_eq!(grid.len(), 42);
    assert_eq!(grid.first(), Some(&dates::ymd(2024, 2, 25)));
    assert_eq!(grid.last(), Some(&dates::ymd(2024, 4, 6)));

    let index = EventIndex::build(store.list_all(), "");
    let on_day: Vec<_> = index
        .events_for_day(dates::ymd(2024, 3, 10))
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(on_day, ["e1"]);
    assert!(index.events_for_day(dates::ymd(2024, 3, 11)).is_empty());
}

#[test]
fn test_drag_scenario() {
    let mut store = EventStore::with_events(vec![events::standup()]);

    let change = reschedule(&mut store, "e1", dates::ymd(2024, 3, 12)).unwrap();
    assert_eq!(change.start, dates::local(2024, 3, 12, 9, 0));
    assert_eq!(change.end, dates::local(2024, 3, 12, 9, 30));

    let index = EventIndex::build(store.list_all(), "");
    assert!(index.events_for_day(dates::ymd(2024, 3, 10)).is_empty());
    assert_eq!(index.events_for_day(dates::ymd(2024, 3, 12)).len(), 1);
}

#[test]
fn test_agenda_virtualization_scenario() {
    let events = events::busy_fortnight();
    assert_eq!(events.len(), 25);

    let layout = AgendaLayout::build(&events, dates::ymd(2024, 6, 1), &AgendaMetrics::default());
    assert!(layout.is_virtualized());
    assert_eq!(layout.groups().len(), 10);
    assert_eq!(layout.event_count(), 25);

    let day5 = layout
        .groups()
        .iter()
        .find(|g| g.group.date() == dates::ymd(2024, 6, 5))
        .unwrap();
    let window = layout.window(Viewport::new(day5.offset, day5.group.height));

    let days: Vec<_> = window.groups.iter().map(|g| g.group.date()).collect();
    assert_eq!(days, [dates::ymd(2024, 6, 5)]);
}

#[test]
fn test_agenda_from_mid_range_drops_earlier_days() {
    let events = events::busy_fortnight();
    let layout = AgendaLayout::build(&events, dates::ymd(2024, 6, 8), &AgendaMetrics::default());

    assert_eq!(layout.groups().len(), 3);
    assert_eq!(layout.event_count(), 6);
    assert_eq!(layout.groups()[0].offset, 0.0);
}

#[test]
fn test_create_search_and_index_flow() {
    let mut store = EventStore::new();
    let start = dates::local(2024, 3, 12, 14, 0);
    store.create(EventDraft::new("Design review", start, start + Duration::hours(1)));
    store.create(EventDraft::new("Lunch", start - Duration::hours(2), start));

    let t0 = Instant::now();
    let mut search = SearchDebouncer::default();
    let mut cache = IndexCache::new();
    search.input("DESIGN", t0);
    assert!(search.poll(t0 + StdDuration::from_millis(50)).is_none());
    assert_eq!(
        cache.get(&store, search.settled()).event_count(),
        2,
        "filter not applied until the pause elapses"
    );

    let term = search.poll(t0 + StdDuration::from_millis(300)).unwrap().to_string();
    let index = cache.get(&store, &term);
    let titles: Vec<_> = index
        .events_for_day(dates::ymd(2024, 3, 12))
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(titles, ["Design review"]);
}

#[test]
fn test_week_view_positions() {
    let mut store = EventStore::new();
    let start = dates::local(2024, 3, 13, 18, 0);
    let id = store
        .create(EventDraft::new("Dinner", start, start + Duration::hours(3)))
        .id
        .clone();

    let index = EventIndex::build(store.list_all(), "");
    let week = week_grid(dates::ymd(2024, 3, 13));
    let placed: Vec<_> = week
        .iter()
        .flat_map(|day| index.events_for_day(*day))
        .collect();

    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].id, id);
    let pos = position(placed[0]);
    assert!((pos.top - 0.75).abs() < 1e-6);
    assert!((pos.height - 0.125).abs() < 1e-6);
}

#[test]
fn test_keyboard_enter_opens_draft_for_focused_day() {
    let nav = NavigationState::new(dates::ymd(2024, 3, 15), ViewMode::Month);
    let grid = month_grid(nav.current_date);

    let moved = move_focus(&grid, Some(12), GridKey::Enter, 3, dates::ymd(2024, 3, 1));
    let day = moved.activated.unwrap();
    assert_eq!(day, dates::ymd(2024, 3, 8));

    let mut store = EventStore::new();
    let mut draft = EventDraft::for_day(day, Duration::hours(1));
    draft.title = "Planning".to_string();
    assert!(draft.validate().is_ok());
    let id = store.create(draft).id.clone();

    let index = EventIndex::build(store.list_all(), "");
    assert_eq!(index.events_for_day(day)[0].id, id);
}

#[test]
fn test_stale_references_are_tolerated() {
    let mut store = EventStore::with_events(vec![events::standup()]);
    let mut drag = DragState::new();
    drag.begin("e1");

    assert!(store.delete("e1"));
    assert!(!store.delete("e1"));
    assert!(!store.update("e1", EventPatch::default()));
    assert!(drag.finish(&mut store, dates::ymd(2024, 3, 11)).is_none());
    assert!(store.is_empty());
}

#[test]
fn test_leap_day_grid() {
    let grid = month_grid(dates::leap_day_2024());
    assert!(grid.contains(&dates::leap_day_2024()));
    assert_eq!(grid.first(), Some(&dates::ymd(2024, 1, 28)));
}

#[test]
fn test_edit_form_round_trip_updates_event() {
    let mut store = EventStore::with_events(vec![events::standup()]);
    let original = store.get("e1").unwrap().clone();

    let mut form = EventDraft::from(original.clone());
    form.title = "Standup (remote)".to_string();
    form.category = Some(PRESET_CATEGORIES[2].to_string());
    form.description = None;
    assert!(form.validate().is_ok());

    assert!(store.update("e1", EventPatch::from_draft(form)));
    let edited = store.get("e1").unwrap();
    assert_eq!(edited.id, "e1");
    assert_eq!(edited.title, "Standup (remote)");
    assert_eq!(edited.category.as_deref(), Some("Meeting"));
    assert_eq!(edited.description, None);
    assert_eq!(edited.start, original.start);
    assert_eq!(edited.end, original.end);
}

#[test]
fn test_settings_drive_debounce_and_click_draft() {
    let settings = Settings {
        search_debounce_ms: 150,
        default_event_minutes: 45,
        ..Settings::default()
    };

    let mut debouncer = SearchDebouncer::new(settings.search_debounce());
    let t0 = Instant::now();
    debouncer.input("stand", t0);
    assert_eq!(debouncer.poll(t0 + StdDuration::from_millis(100)), None);
    assert_eq!(debouncer.poll(t0 + StdDuration::from_millis(150)), Some("stand"));

    let draft = EventDraft::for_day(dates::ymd(2024, 3, 12), settings.default_event_duration());
    assert_eq!(draft.end - draft.start, Duration::minutes(45));
}
