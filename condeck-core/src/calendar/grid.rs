//! The visible day grid for a month view.

use chrono::{Datelike, Duration, NaiveDate};

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_GRID: usize = 6;
/// Total days in the visible grid, lead/trail days included.
pub const GRID_DAYS: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// A single day cell in the visible grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for lead/trail days borrowed from adjacent months.
    pub in_month: bool,
    pub is_today: bool,
}

/// The Sunday on or before the first day of `reference`'s month.
pub fn grid_start(reference: NaiveDate) -> NaiveDate {
    let first_of_month = reference.with_day(1).unwrap();
    let lead_days = first_of_month.weekday().num_days_from_sunday();

    first_of_month - Duration::days(i64::from(lead_days))
}

/// The 42 consecutive days covering `reference`'s month.
///
/// Always exactly six Sunday-to-Saturday weeks; months spanning fewer real
/// weeks get trailing next-month days to fill the block.
pub fn grid_days(reference: NaiveDate, today: NaiveDate) -> Vec<CalendarDay> {
    let start = grid_start(reference);

    (0..GRID_DAYS as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);
            CalendarDay {
                date,
                in_month: date.year() == reference.year() && date.month() == reference.month(),
                is_today: date == today,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_has_42_consecutive_days() {
        let days = grid_days(date(2024, 6, 15), date(2024, 6, 15));

        assert_eq!(days.len(), GRID_DAYS);
        for pair in days.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn grid_runs_sunday_to_saturday() {
        // Spot-check a year of months
        for month in 1..=12 {
            let days = grid_days(date(2024, month, 1), date(2024, 6, 15));
            assert_eq!(days[0].date.weekday(), Weekday::Sun);
            assert_eq!(days[GRID_DAYS - 1].date.weekday(), Weekday::Sat);
        }
    }

    #[test]
    fn june_2024_starts_on_may_26() {
        // June 1st 2024 is a Saturday, so the grid leads with six May days.
        assert_eq!(grid_start(date(2024, 6, 15)), date(2024, 5, 26));

        let days = grid_days(date(2024, 6, 15), date(2024, 6, 15));
        assert_eq!(days[0].date, date(2024, 5, 26));
        assert_eq!(days[6].date, date(2024, 6, 1));
    }

    #[test]
    fn four_week_month_still_fills_six_rows() {
        // February 2026 is exactly four Sunday-to-Saturday weeks.
        let days = grid_days(date(2026, 2, 1), date(2026, 2, 1));

        assert_eq!(days.len(), GRID_DAYS);
        assert_eq!(days[0].date, date(2026, 2, 1));
        // Trailing rows are March lead days.
        assert_eq!(days[GRID_DAYS - 1].date, date(2026, 3, 14));
    }

    #[test]
    fn reference_day_of_month_is_irrelevant() {
        let first = grid_days(date(2024, 6, 1), date(2024, 6, 15));
        let last = grid_days(date(2024, 6, 30), date(2024, 6, 15));
        assert_eq!(first, last);
    }

    #[test]
    fn in_month_and_today_flags() {
        let today = date(2024, 6, 10);
        let days = grid_days(date(2024, 6, 15), today);

        let may_day = days.iter().find(|d| d.date == date(2024, 5, 28)).unwrap();
        assert!(!may_day.in_month);

        let june_day = days.iter().find(|d| d.date == date(2024, 6, 10)).unwrap();
        assert!(june_day.in_month);
        assert!(june_day.is_today);

        assert_eq!(days.iter().filter(|d| d.is_today).count(), 1);
        assert_eq!(days.iter().filter(|d| d.in_month).count(), 30);
    }
}
