//! Clock port for "now" and "today".
//!
//! Everything time-relative in the scheduler (today's calendar cell, the
//! default selected date, the upcoming/completed split) reads the wall clock
//! through this trait so it can be pinned in tests.
//!
//! # Example
//!
//! ```
//! use aura_core::{Clock, FixedClock};
//! use chrono::NaiveDate;
//!
//! let now = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let clock = FixedClock::new(now);
//! assert_eq!(clock.today(), now.date());
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use parking_lot::RwLock;

/// Source of the local wall-clock time.
pub trait Clock: Send + Sync {
    /// Current local date-time
    fn now(&self) -> NaiveDateTime;

    /// Current local date
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Clock pinned to a settable instant.
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now: RwLock::new(now) }
    }

    /// Move the clock to `now`
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.write() = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.read()
    }
}
