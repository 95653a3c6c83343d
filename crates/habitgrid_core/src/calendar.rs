//! Date and calendar-grid utilities.
//!
//! # Responsibility
//! - Produce day sequences and week-aligned grids for the monthly views.
//! - Own the canonical `YYYY-MM-DD` date key format.
//!
//! # Invariants
//! - All functions are total: out-of-range input yields an empty sequence,
//!   never a panic.
//! - Months are 1-12. Weeks start on Sunday.
//! - The progress view never contains a date after the bound day.

use chrono::{Datelike, NaiveDate};

/// Every calendar date of a month, 1st to last (28-31 entries).
///
/// Returns an empty vector for an invalid year/month combination.
pub fn days_in_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|day| day.month() == month && day.year() == year)
        .collect()
}

/// Canonical zero-padded `YYYY-MM-DD` key for a date.
///
/// This is the universal entry key format; it must stay stable and
/// collision-free for every date the views can reach.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's date in the local calendar.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Today's canonical date key.
pub fn today_key() -> String {
    format_date(today())
}

/// Week-aligned progress view of the month containing `today`.
///
/// Leading `None` placeholders cover the weekday offset before the 1st, then
/// one date key per day from the 1st through `today` inclusive. Trailing
/// days of the month are intentionally absent: the view shows progress so
/// far, not a full static month.
pub fn calendar_view(today: NaiveDate) -> Vec<Option<String>> {
    let Some(first) = NaiveDate::from_ymd_opt(today.year(), today.month(), 1) else {
        return Vec::new();
    };
    let offset = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<Option<String>> = vec![None; offset];
    cells.extend(
        first
            .iter_days()
            .take_while(|day| *day <= today)
            .map(|day| Some(format_date(day))),
    );
    cells
}

/// Week-aligned grid of a full month: leading `None` placeholders, then
/// every day of the month. Used when browsing past months.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let days = days_in_month(year, month);
    let Some(first) = days.first().copied() else {
        return Vec::new();
    };
    let offset = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<Option<NaiveDate>> = vec![None; offset];
    cells.extend(days.into_iter().map(Some));
    cells
}

/// Date keys from the 1st of `today`'s month through `today` inclusive.
pub fn month_date_range(today: NaiveDate) -> Vec<String> {
    let Some(first) = NaiveDate::from_ymd_opt(today.year(), today.month(), 1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|day| *day <= today)
        .map(format_date)
        .collect()
}

/// Month navigation cursor bounded by a habit's lifetime.
///
/// Starts at the current month. `previous` refuses to move before the
/// month the habit was created in; `next` refuses to move past the current
/// month, so future months are never viewable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month: u32,
    floor: (i32, u32),
    ceil: (i32, u32),
}

impl MonthCursor {
    pub fn new(created: NaiveDate, today: NaiveDate) -> Self {
        let ceil = (today.year(), today.month());
        let mut floor = (created.year(), created.month());
        if floor > ceil {
            // Creation timestamp ahead of the clock (e.g. restored backup);
            // collapse the range to the current month.
            floor = ceil;
        }
        Self {
            year: ceil.0,
            month: ceil.1,
            floor,
            ceil,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn can_go_previous(&self) -> bool {
        (self.year, self.month) > self.floor
    }

    pub fn can_go_next(&self) -> bool {
        (self.year, self.month) < self.ceil
    }

    /// Moves one month back; returns whether the cursor moved.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        if self.month == 1 {
            self.year -= 1;
            self.month = 12;
        } else {
            self.month -= 1;
        }
        true
    }

    /// Moves one month forward; returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        if self.month == 12 {
            self.year += 1;
            self.month = 1;
        } else {
            self.month += 1;
        }
        true
    }
}
