//! Meeting ledger - the authoritative collection of booked meetings

use std::collections::BTreeMap;
use std::sync::Arc;

use aura_domain::{AuraError, Meeting, MeetingId, NewMeeting, Result, SchedulingError, TimeSlot};
use chrono::NaiveDate;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use super::memory::{InMemoryMeetingStore, SequentialIdGenerator};
use super::ports::{IdGenerator, MeetingStore};

/// Booked meetings for one scheduling session.
///
/// Uniqueness of `(date, time)` is checked on insert rather than stored as a
/// key. Mutations go through a single writer lock so the check and the insert
/// cannot interleave with another writer in the same process.
pub struct MeetingLedger {
    store: Arc<dyn MeetingStore>,
    ids: Arc<dyn IdGenerator>,
    writer: Mutex<()>,
}

impl MeetingLedger {
    /// Create a ledger over the given store and id source
    pub fn new(store: Arc<dyn MeetingStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids, writer: Mutex::new(()) }
    }

    /// Ledger that lives only as long as the process
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryMeetingStore::new()), Arc::new(SequentialIdGenerator::new()))
    }

    /// Book a meeting.
    ///
    /// # Errors
    /// [`SchedulingError::SlotConflict`] if the date already has a meeting at
    /// that time, [`SchedulingError::Storage`] if the store fails.
    pub fn insert(&self, record: NewMeeting) -> std::result::Result<Meeting, SchedulingError> {
        let _writer = self.writer.lock();

        let (date, time) = (record.date, record.time);
        if self.store.find_by_date(date)?.iter().any(|m| m.occupies(date, time)) {
            warn!(%date, %time, "rejected booking for occupied slot");
            return Err(SchedulingError::SlotConflict { date, time });
        }

        let meeting = Meeting::from_new(self.ids.next_id(), record);
        match self.store.insert(meeting.clone()) {
            Ok(()) => {}
            Err(AuraError::Conflict(reason)) => {
                warn!(%date, %time, %reason, "store rejected booking for occupied slot");
                return Err(SchedulingError::SlotConflict { date, time });
            }
            Err(err) => return Err(err.into()),
        }

        info!(
            meeting_id = %meeting.id,
            %date,
            %time,
            participants = meeting.participants.len(),
            "meeting booked"
        );
        Ok(meeting)
    }

    /// Remove a meeting. Unknown ids are a no-op and yield `false`.
    pub fn remove(&self, id: &MeetingId) -> Result<bool> {
        let _writer = self.writer.lock();

        let removed = self.store.remove(id)?;
        if removed {
            info!(meeting_id = %id, "meeting removed");
        } else {
            debug!(meeting_id = %id, "remove ignored for unknown meeting");
        }
        Ok(removed)
    }

    /// Meetings on `date`, in no particular order
    pub fn query_by_date(&self, date: NaiveDate) -> Result<Vec<Meeting>> {
        self.store.find_by_date(date)
    }

    /// Every meeting, most recently booked first
    pub fn all(&self) -> Result<Vec<Meeting>> {
        self.store.list_all()
    }

    /// Slots already taken on `date`, sorted
    pub fn booked_slots(&self, date: NaiveDate) -> Result<Vec<TimeSlot>> {
        let mut slots: Vec<TimeSlot> = self.query_by_date(date)?.iter().map(|m| m.time).collect();
        slots.sort_unstable();
        Ok(slots)
    }

    /// Number of meetings per date within `first..=last`, for calendar badges.
    /// Dates without meetings are absent from the map.
    pub fn counts_by_date(
        &self,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, usize>> {
        let mut counts = BTreeMap::new();
        for meeting in self.all()?.iter().filter(|m| first <= m.date && m.date <= last) {
            *counts.entry(meeting.date).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

impl std::fmt::Debug for MeetingLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeetingLedger").finish_non_exhaustive()
    }
}
