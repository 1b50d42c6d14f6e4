//! Date navigation and month-grid keyboard focus.
//!
//! Both are small pieces of view state owned by the presentation layer and
//! handed to these functions explicitly.

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::models::ui::ViewMode;
use crate::services::grid::MONTH_GRID_CELLS;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const DAY_NAMES_FULL: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// The displayed date and view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub current_date: NaiveDate,
    pub view: ViewMode,
}

impl NavigationState {
    pub fn new(current_date: NaiveDate, view: ViewMode) -> Self {
        Self { current_date, view }
    }

    /// Month view jumps to the first of the next month, week view by seven
    /// days, agenda by one day.
    pub fn go_to_next(&mut self) {
        self.current_date = step(self.current_date, self.view, true);
    }

    pub fn go_to_previous(&mut self) {
        self.current_date = step(self.current_date, self.view, false);
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.current_date = today;
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.current_date = date;
    }

    /// Jump to `month` (1-12) of the current year, keeping the day where it
    /// exists in the target month.
    pub fn set_month(&mut self, month: u32) {
        if let Some(date) = clamp_day(self.current_date.year(), month, self.current_date.day()) {
            self.current_date = date;
        }
    }

    pub fn set_year(&mut self, year: i32) {
        if let Some(date) = clamp_day(year, self.current_date.month(), self.current_date.day()) {
            self.current_date = date;
        }
    }

    /// Header title such as `March 2024`.
    pub fn title(&self) -> String {
        format!(
            "{} {}",
            MONTH_NAMES[self.current_date.month0() as usize],
            self.current_date.year()
        )
    }
}

fn step(date: NaiveDate, view: ViewMode, forward: bool) -> NaiveDate {
    match view {
        ViewMode::Month => {
            let first = date.with_day(1).unwrap_or(date);
            let moved = if forward {
                first.checked_add_months(Months::new(1))
            } else {
                first.checked_sub_months(Months::new(1))
            };
            moved.unwrap_or(first)
        }
        ViewMode::Week => shift_days(date, 7, forward),
        ViewMode::Agenda => shift_days(date, 1, forward),
    }
}

fn shift_days(date: NaiveDate, days: i64, forward: bool) -> NaiveDate {
    let delta = Duration::days(if forward { days } else { -days });
    date.checked_add_signed(delta).unwrap_or(date)
}

fn clamp_day(year: i32, month: u32, desired_day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last_day = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28);
    NaiveDate::from_ymd_opt(year, month, desired_day.min(last_day))
}

/// `(month number, name)` pairs for the header month picker, January first.
pub fn month_options() -> Vec<(u32, &'static str)> {
    (1..).zip(MONTH_NAMES).collect()
}

/// Years offered by the header year picker: five either side of `current`.
pub fn year_options(current: i32) -> Vec<i32> {
    (current - 5..=current + 5).collect()
}

/// Keys the month grid reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKey {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Enter,
    Space,
}

impl GridKey {
    /// Map a DOM-style key name (`ArrowLeft`, `Home`, `" "` ...).
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(GridKey::Left),
            "ArrowRight" => Some(GridKey::Right),
            "ArrowUp" => Some(GridKey::Up),
            "ArrowDown" => Some(GridKey::Down),
            "Home" => Some(GridKey::Home),
            "End" => Some(GridKey::End),
            "Enter" => Some(GridKey::Enter),
            " " | "Space" => Some(GridKey::Space),
            _ => None,
        }
    }
}

/// Result of a key press on the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusMove {
    pub index: usize,
    /// Set for Enter/Space: the caller opens a new-event draft for this day.
    pub activated: Option<NaiveDate>,
}

/// Move keyboard focus across a 42-cell month grid.
///
/// With no current focus the starting cell is today, else the first cell of
/// `current_month` (1-12), else the first cell.
pub fn move_focus(
    grid: &[NaiveDate],
    focused: Option<usize>,
    key: GridKey,
    current_month: u32,
    today: NaiveDate,
) -> FocusMove {
    let last = MONTH_GRID_CELLS.min(grid.len()).saturating_sub(1);
    let start = focused.unwrap_or_else(|| {
        grid.iter()
            .position(|d| *d == today)
            .or_else(|| grid.iter().position(|d| d.month() == current_month))
            .unwrap_or(0)
    });

    let index = match key {
        GridKey::Right => start.saturating_add(1),
        GridKey::Left => start.saturating_sub(1),
        GridKey::Down => start.saturating_add(7),
        GridKey::Up => start.saturating_sub(7),
        GridKey::Home => 0,
        GridKey::End => last,
        GridKey::Enter | GridKey::Space => start,
    }
    .min(last);

    let activated = match key {
        GridKey::Enter | GridKey::Space => grid.get(index).copied(),
        _ => None,
    };

    FocusMove { index, activated }
}
