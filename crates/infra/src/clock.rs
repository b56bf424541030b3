//! Wall-clock implementation of the `Clock` port

use aura_core::Clock;
use chrono::{Local, NaiveDateTime};

/// Reads the host's local time zone. Every call is a fresh read.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
