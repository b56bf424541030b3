//! Month grid construction and month navigation
//!
//! Grids are Sunday-first. Days before the 1st and after the last day of the
//! month are filled from the neighbouring months so that every row holds a
//! full week.

use aura_domain::constants::{DAYS_PER_WEEK, MONTH_KEY_FORMAT, MONTH_LABEL_FORMAT};
use aura_domain::{AuraError, CalendarCell, Result};
use chrono::{Datelike, Days, Months, NaiveDate};

/// First civil day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Last civil day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let first = start_of_month(date);
    first + Days::new(u64::from(days_in_month(first.year(), first.month()) - 1))
}

/// Number of days in the given month, `0` for an out-of-range month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => 29,
        2 => 28,
        _ => 0,
    }
}

/// Build the full grid for the month containing `reference`.
///
/// The result is contiguous, one civil day per cell, and its length is always
/// a multiple of seven. A month starting on Sunday gets no leading padding.
pub fn month_grid(reference: NaiveDate) -> Vec<CalendarCell> {
    let first = start_of_month(reference);
    let last = end_of_month(reference);

    let leading = first.weekday().num_days_from_sunday() as usize;
    let filled = leading + last.day() as usize;
    let total = filled.div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;

    // Only fails at the very start of chrono's supported range.
    let grid_start = first.checked_sub_days(Days::new(leading as u64)).unwrap_or(first);

    grid_start
        .iter_days()
        .take(total)
        .map(|date| CalendarCell::new(date, first <= date && date <= last))
        .collect()
}

/// Move `date` by `months`, keeping the day of month where it exists and
/// clamping to the last day of the target month otherwise.
///
/// Returns `None` outside chrono's supported date range.
pub fn shift_month(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}

/// Displayed month of the scheduler, anchored on its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCursor {
    month: NaiveDate,
}

impl MonthCursor {
    pub fn containing(date: NaiveDate) -> Self {
        Self { month: start_of_month(date) }
    }

    /// Parse a `YYYY-MM` month key.
    pub fn parse(key: &str) -> Result<Self> {
        NaiveDate::parse_from_str(&format!("{}-01", key.trim()), "%Y-%m-%d")
            .map(Self::containing)
            .map_err(|e| AuraError::InvalidInput(format!("Invalid month {key:?}: {e}")))
    }

    pub fn first_day(self) -> NaiveDate {
        self.month
    }

    pub fn last_day(self) -> NaiveDate {
        end_of_month(self.month)
    }

    #[must_use]
    pub fn next(self) -> Self {
        self.shift(1)
    }

    #[must_use]
    pub fn prev(self) -> Self {
        self.shift(-1)
    }

    /// Stays put when the move would leave the supported date range.
    #[must_use]
    pub fn shift(self, months: i32) -> Self {
        shift_month(self.month, months).map_or(self, Self::containing)
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        start_of_month(date) == self.month
    }

    /// Human label such as `March 2025`
    pub fn label(self) -> String {
        self.month.format(MONTH_LABEL_FORMAT).to_string()
    }

    /// `YYYY-MM` key
    pub fn key(self) -> String {
        self.month.format(MONTH_KEY_FORMAT).to_string()
    }

    pub fn grid(self) -> Vec<CalendarCell> {
        month_grid(self.month)
    }
}
