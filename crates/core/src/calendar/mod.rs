//! Month calendar grids

pub mod grid;

pub use grid::{days_in_month, end_of_month, month_grid, shift_month, start_of_month, MonthCursor};
