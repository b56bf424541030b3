//! Upcoming/completed split against a fixed reference instant

use aura_domain::{Meeting, MeetingPhase};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Phase of `meeting` relative to `now`. A meeting starting exactly at `now`
/// is still upcoming.
pub fn phase_of(meeting: &Meeting, now: NaiveDateTime) -> MeetingPhase {
    if meeting.starts_at() >= now {
        MeetingPhase::Upcoming
    } else {
        MeetingPhase::Completed
    }
}

/// Both halves of a partition. Every input meeting lands in exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// Soonest first
    pub upcoming: Vec<Meeting>,
    /// Most recent first
    pub completed: Vec<Meeting>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.upcoming.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.completed.is_empty()
    }
}

/// Split `meetings` into upcoming and completed relative to `now`.
pub fn partition(meetings: &[Meeting], now: NaiveDateTime) -> Partition {
    let (mut upcoming, mut completed): (Vec<Meeting>, Vec<Meeting>) = meetings
        .iter()
        .cloned()
        .partition(|m| phase_of(m, now) == MeetingPhase::Upcoming);

    upcoming.sort_by_key(Meeting::starts_at);
    completed.sort_by_key(|m| std::cmp::Reverse(m.starts_at()));

    Partition { upcoming, completed }
}

#[cfg(test)]
mod tests {
    use aura_domain::{MeetingId, NewMeeting};
    use chrono::NaiveDate;

    use super::*;

    fn meeting(id: &str, day: u32, time: &str) -> Meeting {
        Meeting::from_new(
            MeetingId::new(id),
            NewMeeting {
                title: id.to_string(),
                date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
                time: time.parse().unwrap(),
                participants: Vec::new(),
            },
        )
    }

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    fn ids(meetings: &[Meeting]) -> Vec<&str> {
        meetings.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_meeting_at_now_is_upcoming() {
        let m = meeting("a", 10, "09:00");

        assert_eq!(phase_of(&m, at(10, 9, 0)), MeetingPhase::Upcoming);
        assert_eq!(phase_of(&m, at(10, 9, 1)), MeetingPhase::Completed);
    }

    #[test]
    fn test_partition_is_total_and_ordered() {
        let meetings = vec![
            meeting("late", 12, "16:00"),
            meeting("old", 3, "09:00"),
            meeting("soon", 10, "13:00"),
            meeting("older", 1, "10:30"),
            meeting("same-day-past", 10, "09:00"),
        ];

        let split = partition(&meetings, at(10, 12, 0));

        assert_eq!(split.len(), meetings.len());
        assert_eq!(ids(&split.upcoming), ["soon", "late"]);
        assert_eq!(ids(&split.completed), ["same-day-past", "old", "older"]);
    }

    #[test]
    fn test_time_breaks_ties_within_a_day() {
        let meetings = vec![meeting("b", 11, "10:00"), meeting("a", 11, "09:30")];

        let split = partition(&meetings, at(1, 0, 0));

        assert_eq!(ids(&split.upcoming), ["a", "b"]);
        assert!(split.completed.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(partition(&[], at(1, 0, 0)).is_empty());
    }
}
