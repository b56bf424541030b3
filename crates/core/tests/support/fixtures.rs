use std::sync::Arc;

use aura_core::{FixedClock, InMemoryMeetingStore, SchedulerService, SequentialIdGenerator};
use aura_domain::{Meeting, MeetingId, NewMeeting, SchedulerConfig, TimeSlot};
use chrono::{NaiveDate, NaiveDateTime};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
    date.and_hms_opt(h, m, 0).unwrap()
}

pub fn slot(label: &str) -> TimeSlot {
    label.parse().unwrap()
}

/// Monday 2025-03-10, the reference day of most scenarios
pub fn monday() -> NaiveDate {
    date(2025, 3, 10)
}

/// Saturday 2025-03-15
pub fn saturday() -> NaiveDate {
    date(2025, 3, 15)
}

pub fn new_meeting(title: &str, date: NaiveDate, time: &str) -> NewMeeting {
    NewMeeting { title: title.to_string(), date, time: slot(time), participants: Vec::new() }
}

pub fn meeting(id: &str, date: NaiveDate, time: &str) -> Meeting {
    Meeting::from_new(MeetingId::new(id), new_meeting(id, date, time))
}

/// Service over an empty in-memory ledger with the clock pinned at `now`.
pub fn service_at(now: NaiveDateTime) -> (SchedulerService, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(now));
    let service = SchedulerService::new(
        &SchedulerConfig::default(),
        Arc::new(InMemoryMeetingStore::new()),
        Arc::new(SequentialIdGenerator::new()),
        clock.clone(),
    )
    .unwrap();
    (service, clock)
}
