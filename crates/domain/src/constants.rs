//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Working window
pub const DEFAULT_START_HOUR: u32 = 9;
pub const DEFAULT_END_HOUR: u32 = 17;
pub const SLOT_MINUTES: u32 = 30;

// Calendar grid
pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

// Civil date/time key formats
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";
pub const MONTH_KEY_FORMAT: &str = "%Y-%m";
pub const MONTH_LABEL_FORMAT: &str = "%B %Y";

// Participants
pub const PARTICIPANT_SEPARATOR: char = ',';
pub const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
