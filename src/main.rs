// Calendar preview
// Prints a month, week or agenda view of an events JSON file

mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};

use calendar_engine::models::event::Event;
use calendar_engine::services::agenda::{AgendaLayout, Viewport};
use calendar_engine::services::event::{EventIndex, EventStore};
use calendar_engine::services::grid::{month_cells, week_grid};
use calendar_engine::services::layout::position;
use calendar_engine::services::navigation::{NavigationState, DAY_NAMES, DAY_NAMES_FULL};
use calendar_engine::services::settings::SettingsService;
use calendar_engine::{Settings, ViewMode};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = cli::parse(std::env::args().skip(1).collect());

    let settings_service = match &args.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::with_default_path(),
    };
    let settings = settings_service.load()?;

    let store = EventStore::with_events(load_events(&args.events_file)?);
    log::info!(
        "Loaded {} events from {}",
        store.len(),
        args.events_file.display()
    );

    let nav = NavigationState::new(args.date, args.view.unwrap_or(settings.default_view));
    let today = Local::now().date_naive();

    match nav.view {
        ViewMode::Month => print_month(&nav, &EventIndex::build(store.list_all(), &args.search), today),
        ViewMode::Week => print_week(&nav, &EventIndex::build(store.list_all(), &args.search)),
        ViewMode::Agenda => {
            let viewport = Viewport::new(args.scroll_offset, args.viewport_height);
            print_agenda(&nav, &store, &args.search, &settings, viewport)
        }
    }

    Ok(())
}

fn load_events(path: &Path) -> Result<Vec<Event>> {
    let json = std::fs::read_to_string(path).context("Failed to read events file")?;
    serde_json::from_str(&json).context("Failed to parse events JSON")
}

fn print_month(nav: &NavigationState, index: &EventIndex, today: NaiveDate) {
    println!("{}", nav.title());
    println!("{}", DAY_NAMES.map(|d| format!("{d:>5}")).concat());

    for week in month_cells(nav.current_date).chunks(7) {
        let mut line = String::new();
        for cell in week {
            let marker = if cell.is_today(today) {
                '*'
            } else if !cell.is_in_month(nav.current_date) {
                '.'
            } else {
                ' '
            };
            let count = index.events_for_day(cell.date).len();
            let badge = if count > 0 { format!("+{count}") } else { String::new() };
            line.push_str(&format!("{marker}{:>2}{badge:<2}", cell.date.day()));
        }
        println!("{line}");
    }
}

fn print_week(nav: &NavigationState, index: &EventIndex) {
    println!("{}", nav.title());
    for day in week_grid(nav.current_date) {
        println!(
            "{} {}",
            DAY_NAMES_FULL[day.weekday().num_days_from_sunday() as usize],
            day.format("%Y-%m-%d")
        );
        for event in index.events_for_day(day) {
            let pos = position(event);
            println!(
                "  {}-{}  {:<30} top {:>5.1}%  height {:>5.1}%",
                event.start.format("%H:%M"),
                event.end.format("%H:%M"),
                event.title,
                pos.top * 100.0,
                pos.height * 100.0
            );
        }
    }
}

fn print_agenda(
    nav: &NavigationState,
    store: &EventStore,
    search: &str,
    settings: &Settings,
    viewport: Viewport,
) {
    let filtered: Vec<Event> = store.search(search).into_iter().cloned().collect();
    let layout = AgendaLayout::build(&filtered, nav.current_date, &settings.agenda);

    if layout.is_empty() {
        println!(
            "No upcoming events on or after {}.",
            nav.current_date.format("%B %-d")
        );
        return;
    }

    let window = layout.window(viewport);
    println!(
        "{} of {} day groups visible, content height {:.0}px",
        window.groups.len(),
        layout.groups().len(),
        window.total_height
    );
    for placed in window.groups {
        let date = placed.group.date();
        println!(
            "[{:>6.0}px] {} {}",
            placed.offset,
            DAY_NAMES_FULL[date.weekday().num_days_from_sunday() as usize],
            date.format("%B %-d")
        );
        for event in &placed.group.events {
            println!(
                "    {} - {}  {}",
                event.start.format("%I:%M %p"),
                event.end.format("%I:%M %p"),
                event.title
            );
        }
    }
}
