//! In-memory adapters for the ledger ports

use std::sync::atomic::{AtomicU64, Ordering};

use aura_domain::{Meeting, MeetingId, Result};
use chrono::NaiveDate;
use parking_lot::RwLock;

use super::ports::{IdGenerator, MeetingStore};

/// Vec-backed meeting store, newest first.
///
/// Nothing survives the process; useful for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct InMemoryMeetingStore {
    meetings: RwLock<Vec<Meeting>>,
}

impl InMemoryMeetingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. `meetings` is taken in newest-first order.
    pub fn with_meetings(meetings: Vec<Meeting>) -> Self {
        Self { meetings: RwLock::new(meetings) }
    }
}

impl MeetingStore for InMemoryMeetingStore {
    fn insert(&self, meeting: Meeting) -> Result<()> {
        self.meetings.write().insert(0, meeting);
        Ok(())
    }

    fn remove(&self, id: &MeetingId) -> Result<bool> {
        let mut meetings = self.meetings.write();
        let before = meetings.len();
        meetings.retain(|m| &m.id != id);
        Ok(meetings.len() != before)
    }

    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Meeting>> {
        Ok(self.meetings.read().iter().filter(|m| m.date == date).cloned().collect())
    }

    fn list_all(&self) -> Result<Vec<Meeting>> {
        Ok(self.meetings.read().clone())
    }
}

/// Deterministic `m_1`, `m_2`, ... identifiers
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> MeetingId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        MeetingId::new(format!("m_{n}"))
    }
}
