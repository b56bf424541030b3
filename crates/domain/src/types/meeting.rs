//! Meeting records and the booking draft

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::DATE_KEY_FORMAT;
use crate::impl_label_conversions;
use crate::types::TimeSlot;

/// `YYYY-MM-DD` key for a civil date, as stored and sent over the wire.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Opaque meeting identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct MeetingId(String);

impl MeetingId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MeetingId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A validated booking that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct NewMeeting {
    pub title: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub participants: Vec<String>,
}

/// A booked meeting.
///
/// Meetings are immutable once stored; corrections are a delete followed by
/// a fresh insert. No two stored meetings share the same `(date, time)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Meeting {
    pub id: MeetingId,
    pub title: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub participants: Vec<String>,
}

impl Meeting {
    pub fn from_new(id: MeetingId, new: NewMeeting) -> Self {
        let NewMeeting { title, date, time, participants } = new;
        Self { id, title, date, time, participants }
    }

    /// Civil instant the meeting starts at (no timezone).
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time.time())
    }

    /// `YYYY-MM-DD` key used for calendar lookups
    pub fn date_key(&self) -> String {
        date_key(self.date)
    }

    pub fn occupies(&self, date: NaiveDate, time: TimeSlot) -> bool {
        self.date == date && self.time == time
    }
}

/// Whether a meeting is still ahead of the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum MeetingPhase {
    Upcoming,
    Completed,
}

impl_label_conversions!(MeetingPhase {
    Upcoming => "upcoming",
    Completed => "completed",
});

/// Mutable booking draft behind the scheduler form.
///
/// Never persisted. After a successful booking only `time` is cleared so the
/// user can book again on the same day without retyping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SchedulerFormState {
    #[serde(default)]
    pub title: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<TimeSlot>,
    #[serde(default)]
    pub participants: String,
}

impl SchedulerFormState {
    /// Empty draft for the given day
    pub fn new(date: NaiveDate) -> Self {
        Self { title: String::new(), date, time: None, participants: String::new() }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_time(mut self, time: TimeSlot) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_participants(mut self, participants: impl Into<String>) -> Self {
        self.participants = participants.into();
        self
    }

    pub fn clear_time(&mut self) {
        self.time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standup() -> Meeting {
        Meeting::from_new(
            MeetingId::new("m_1"),
            NewMeeting {
                title: "Standup".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                time: "09:00".parse().unwrap(),
                participants: vec!["alice@company.com".to_string()],
            },
        )
    }

    #[test]
    fn test_starts_at_combines_date_and_slot() {
        let meeting = standup();
        let expected = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap().and_hms_opt(9, 0, 0).unwrap();

        assert_eq!(meeting.starts_at(), expected);
        assert_eq!(meeting.date_key(), "2025-03-10");
        assert_eq!(date_key(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()), "2025-01-05");
    }

    #[test]
    fn test_meeting_json_shape() {
        let json = serde_json::to_value(standup()).unwrap();

        assert_eq!(json["id"], "m_1");
        assert_eq!(json["date"], "2025-03-10");
        assert_eq!(json["time"], "09:00");
        assert_eq!(json["participants"][0], "alice@company.com");
    }

    #[test]
    fn test_form_deserializes_without_optional_fields() {
        let form: SchedulerFormState = serde_json::from_str(r#"{"date":"2025-03-10"}"#).unwrap();

        assert_eq!(form, SchedulerFormState::new(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()));
    }

    #[test]
    fn test_clear_time_keeps_title_and_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let mut form = SchedulerFormState::new(date)
            .with_title("Retro")
            .with_time("10:00".parse().unwrap())
            .with_participants("bob@company.com");

        form.clear_time();

        assert_eq!(form.time, None);
        assert_eq!(form.title, "Retro");
        assert_eq!(form.date, date);
        assert_eq!(form.participants, "bob@company.com");
    }
}
