//! Mock store implementations for testing
//!
//! Wraps the in-memory store to count calls or inject failures, so tests can
//! observe what the ledger does with its port.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use aura_core::{InMemoryMeetingStore, MeetingStore};
use aura_domain::{AuraError, Meeting, MeetingId, Result as DomainResult};
use chrono::NaiveDate;

/// In-memory store that counts inserts and can be switched into failure.
#[derive(Debug, Default)]
pub struct MockMeetingStore {
    inner: InMemoryMeetingStore,
    inserts: AtomicUsize,
    failing: AtomicBool,
}

impl MockMeetingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a database error.
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    fn check(&self) -> DomainResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AuraError::Database("disk I/O error".to_string()));
        }
        Ok(())
    }
}

impl MeetingStore for MockMeetingStore {
    fn insert(&self, meeting: Meeting) -> DomainResult<()> {
        self.check()?;
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(meeting)
    }

    fn remove(&self, id: &MeetingId) -> DomainResult<bool> {
        self.check()?;
        self.inner.remove(id)
    }

    fn find_by_date(&self, date: NaiveDate) -> DomainResult<Vec<Meeting>> {
        self.check()?;
        self.inner.find_by_date(date)
    }

    fn list_all(&self) -> DomainResult<Vec<Meeting>> {
        self.check()?;
        self.inner.list_all()
    }
}
