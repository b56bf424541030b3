//! Time slot labels
//!
//! A slot is a half-hour boundary inside the daily working window, carried as
//! a zero-padded 24-hour `HH:MM` label.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::errors::AuraError;

/// `HH:MM` slot label. Ordering is chronological within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct TimeSlot(#[cfg_attr(feature = "ts-gen", ts(type = "string"))] NaiveTime);

impl TimeSlot {
    /// Build a slot from an hour and minute, `None` when out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn time(self) -> NaiveTime {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    pub fn minute(self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeSlot {
    type Err = AuraError;

    /// Parses exactly `HH:MM`. Unpadded or second-bearing values are rejected
    /// so that label order keeps matching chronological order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AuraError::InvalidInput(format!("Invalid time slot: {s:?}"));

        let bytes = s.as_bytes();
        if !s.is_ascii() || bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }

        let digits = |range: std::ops::Range<usize>| -> Option<u32> {
            let part = &s[range];
            part.bytes().all(|b| b.is_ascii_digit()).then(|| part.parse().ok()).flatten()
        };

        let hour = digits(0..2).ok_or_else(invalid)?;
        let minute = digits(3..5).ok_or_else(invalid)?;

        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// A candidate slot annotated with whether it is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SlotView {
    pub time: TimeSlot,
    pub booked: bool,
}
