//! Calendar grid types

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_label_conversions;

/// One cell of a month grid.
///
/// Padding cells from the neighbouring months carry `in_month = false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CalendarCell {
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub date: NaiveDate,
    pub in_month: bool,
}

impl CalendarCell {
    pub fn new(date: NaiveDate, in_month: bool) -> Self {
        Self { date, in_month }
    }
}

/// Grid cell annotated for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CalendarDay {
    #[serde(flatten)]
    pub cell: CalendarCell,
    pub meeting_count: usize,
    pub is_today: bool,
    pub is_selected: bool,
}

/// A fully annotated month, Sunday-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct MonthView {
    /// First day of the displayed month
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub month: NaiveDate,
    pub label: String,
    pub weekdays: Vec<String>,
    pub days: Vec<CalendarDay>,
}

/// Civil day classification driving slot granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum DayKind {
    Weekday,
    Weekend,
}

impl_label_conversions!(DayKind {
    Weekday => "weekday",
    Weekend => "weekend",
});

impl DayKind {
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => Self::Weekend,
            _ => Self::Weekday,
        }
    }
}
