use crate::models::GridCell;
use chrono::{Datelike, NaiveDate};

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "previous" => Some(Self::Previous),
            "next" => Some(Self::Next),
            _ => None,
        }
    }
}

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Day count via the first-of-next-month trick, so leap years come from the
/// calendar itself rather than a table.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Weekday index of day 1, 0 = Sunday .. 6 = Saturday.
pub fn first_weekday_offset(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Leading blank cells followed by the numbered day cells. The last week is
/// not padded out with trailing blanks.
pub fn compute_grid(
    year: i32,
    month: u32,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> Vec<GridCell> {
    let offset = first_weekday_offset(year, month);
    let days = days_in_month(year, month);

    let mut cells = Vec::with_capacity((offset + days) as usize);
    for _ in 0..offset {
        cells.push(GridCell::default());
    }

    for day in 1..=days {
        let is_today = day == today.day() && month == today.month() && year == today.year();
        let is_selected = selected
            .map(|picked| day == picked.day() && month == picked.month() && year == picked.year())
            .unwrap_or(false);

        cells.push(GridCell {
            day: Some(day),
            is_today,
            is_selected,
        });
    }

    cells
}

/// Shifts the displayed month by one, rolling the year at the Dec/Jan
/// boundary. Day-of-month normalizes to 1; the selection is untouched.
pub fn navigate(reference: NaiveDate, direction: Direction) -> NaiveDate {
    let (year, month) = match direction {
        Direction::Previous if reference.month() == 1 => (reference.year() - 1, 12),
        Direction::Previous => (reference.year(), reference.month() - 1),
        Direction::Next if reference.month() == 12 => (reference.year() + 1, 1),
        Direction::Next => (reference.year(), reference.month() + 1),
    };

    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn grid_is_offset_plus_days_with_sequential_numbers() {
        // 2024-03-01 is a Friday.
        let cells = compute_grid(2024, 3, ymd(2026, 1, 5), None);
        assert_eq!(first_weekday_offset(2024, 3), 5);
        assert_eq!(cells.len(), 5 + 31);

        for cell in &cells[..5] {
            assert_eq!(cell.day, None);
            assert!(!cell.is_today);
            assert!(!cell.is_selected);
        }

        let numbers: Vec<u32> = cells[5..].iter().filter_map(|cell| cell.day).collect();
        assert_eq!(numbers, (1..=31).collect::<Vec<u32>>());
    }

    #[test]
    fn month_lengths_follow_the_calendar() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);

        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(2023, month), 30);
        }
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(2023, month), 31);
        }
    }

    #[test]
    fn navigate_rolls_the_year_at_january_and_december() {
        let january = ymd(2024, 1, 17);
        let back = navigate(january, Direction::Previous);
        assert_eq!((back.year(), back.month(), back.day()), (2023, 12, 1));

        let forward = navigate(back, Direction::Next);
        assert_eq!((forward.year(), forward.month()), (2024, 1));

        let december = ymd(2024, 12, 3);
        let next = navigate(december, Direction::Next);
        assert_eq!((next.year(), next.month()), (2025, 1));
    }

    #[test]
    fn today_marks_exactly_one_cell_in_the_current_month() {
        let today = ymd(2024, 3, 15);
        let cells = compute_grid(2024, 3, today, None);
        let marked: Vec<u32> = cells
            .iter()
            .filter(|cell| cell.is_today)
            .filter_map(|cell| cell.day)
            .collect();
        assert_eq!(marked, vec![15]);
    }

    #[test]
    fn today_marks_nothing_in_other_months() {
        let today = ymd(2024, 3, 15);
        assert!(
            compute_grid(2024, 4, today, None)
                .iter()
                .all(|cell| !cell.is_today)
        );
        // Same month number, different year.
        assert!(
            compute_grid(2023, 3, today, None)
                .iter()
                .all(|cell| !cell.is_today)
        );
    }

    #[test]
    fn selection_compares_year_month_and_day() {
        let today = ymd(2026, 1, 5);

        let unselected = compute_grid(2024, 3, today, None);
        assert!(unselected.iter().all(|cell| !cell.is_selected));

        let picked = ymd(2024, 3, 15);
        let cells = compute_grid(2024, 3, today, Some(picked));
        let selected: Vec<u32> = cells
            .iter()
            .filter(|cell| cell.is_selected)
            .filter_map(|cell| cell.day)
            .collect();
        assert_eq!(selected, vec![15]);

        // Day 15 of a different displayed month does not match.
        assert!(
            compute_grid(2024, 4, today, Some(picked))
                .iter()
                .all(|cell| !cell.is_selected)
        );
    }

    #[test]
    fn month_names_cover_the_year() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn direction_parses_only_the_two_known_values() {
        assert_eq!(Direction::parse("previous"), Some(Direction::Previous));
        assert_eq!(Direction::parse("next"), Some(Direction::Next));
        assert_eq!(Direction::parse("sideways"), None);
        assert_eq!(Direction::parse(""), None);
    }
}
