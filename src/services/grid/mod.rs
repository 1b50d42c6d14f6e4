//! Month and week grid generation.
//!
//! Grids are plain date sequences derived from an anchor date. Month grids
//! always cover six full weeks starting on a Sunday so the rendered layout
//! never changes height between months.

use chrono::{Datelike, Days, NaiveDate};

/// Number of cells in a month grid (6 weeks x 7 days).
pub const MONTH_GRID_CELLS: usize = 42;
pub const DAYS_IN_WEEK: usize = 7;

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
///
/// Saturates at `NaiveDate::MIN` instead of panicking.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = u64::from(date.weekday().num_days_from_sunday());
    let offset = (weekday + 7 - u64::from(first_day_of_week % 7)) % 7;
    date.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN)
}

/// 42 consecutive days starting on the Sunday on or before the first of
/// `anchor`'s month.
///
/// Supported for anchors more than six weeks inside chrono's date range; at
/// the very ends the grid is truncated rather than wrapped.
pub fn month_grid(anchor: NaiveDate) -> Vec<NaiveDate> {
    let first_of_month = anchor.with_day(1).unwrap_or(anchor);
    consecutive_days(week_start(first_of_month, 0), MONTH_GRID_CELLS)
}

/// Sunday through Saturday of the week containing `anchor`.
pub fn week_grid(anchor: NaiveDate) -> Vec<NaiveDate> {
    consecutive_days(week_start(anchor, 0), DAYS_IN_WEEK)
}

/// Month grid wrapped as cells so flags can be queried per slot.
pub fn month_cells(anchor: NaiveDate) -> Vec<GridCell> {
    month_grid(anchor).into_iter().map(GridCell::new).collect()
}

fn consecutive_days(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    start.iter_days().take(count).collect()
}

/// A single day slot in a rendered grid. Flags are computed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
}

impl GridCell {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// True when the cell belongs to the month being displayed.
    pub fn is_in_month(&self, anchor: NaiveDate) -> bool {
        self.date.year() == anchor.year() && self.date.month() == anchor.month()
    }

    pub fn is_today(&self, today: NaiveDate) -> bool {
        self.date == today
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_sunday() {
        // Wednesday, Dec 4, 2024
        assert_eq!(week_start(date(2024, 12, 4), 0), date(2024, 12, 1));
    }

    #[test]
    fn test_week_start_monday() {
        assert_eq!(week_start(date(2024, 12, 4), 1), date(2024, 12, 2));
    }

    #[test]
    fn test_week_start_on_first_day_is_identity() {
        assert_eq!(week_start(date(2024, 12, 1), 0), date(2024, 12, 1));
    }

    #[test]
    fn test_month_grid_march_2024() {
        let grid = month_grid(date(2024, 3, 15));
        assert_eq!(grid.len(), MONTH_GRID_CELLS);
        assert_eq!(grid[0], date(2024, 2, 25));
        assert_eq!(grid[41], date(2024, 4, 6));
    }

    #[test]
    fn test_week_start_near_min_date_does_not_panic() {
        let start = week_start(NaiveDate::MIN, 0);
        assert!(start <= NaiveDate::MIN + Days::new(6));
        assert!(month_grid(NaiveDate::MIN).len() <= MONTH_GRID_CELLS);
    }

    #[test]
    fn test_month_grid_starting_on_sunday_has_no_leading_days() {
        // September 2024 starts on a Sunday
        let grid = month_grid(date(2024, 9, 20));
        assert_eq!(grid[0], date(2024, 9, 1));
    }

    #[test_case(2024, 2 ; "leap february")]
    #[test_case(2023, 2 ; "common february")]
    #[test_case(2024, 12 ; "year end")]
    #[test_case(2025, 1 ; "year start")]
    fn test_month_grid_shape(year: i32, month: u32) {
        let anchor = date(year, month, 1);
        let grid = month_grid(anchor);

        assert_eq!(grid.len(), 42);
        assert_eq!(grid[0].weekday(), Weekday::Sun);
        assert!(grid.contains(&anchor));
        assert!(grid.windows(2).all(|w| w[1] == w[0].succ_opt().unwrap()));
    }

    #[test]
    fn test_week_grid_crosses_year_boundary() {
        let week = week_grid(date(2025, 1, 1));
        assert_eq!(week.first(), Some(&date(2024, 12, 29)));
        assert_eq!(week.last(), Some(&date(2025, 1, 4)));
    }

    #[test]
    fn test_cell_flags() {
        let anchor = date(2024, 3, 15);
        let cells = month_cells(anchor);

        assert!(!cells[0].is_in_month(anchor));
        assert!(cells[5].is_in_month(anchor)); // March 1st
        assert!(cells[20].is_today(date(2024, 3, 16)));
        assert!(!cells[20].is_today(date(2024, 3, 17)));
    }
}
