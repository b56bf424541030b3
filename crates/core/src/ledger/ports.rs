//! Port interfaces for meeting persistence and identity
//!
//! These traits define the boundaries between the meeting ledger and
//! infrastructure implementations.

use aura_domain::{Meeting, MeetingId, Result};
use chrono::NaiveDate;

/// Backing store for booked meetings.
///
/// Uses a synchronous API; the ledger serializes writers, so implementations
/// only need to be safe for concurrent readers.
pub trait MeetingStore: Send + Sync {
    /// Persist a meeting at the head of the collection
    fn insert(&self, meeting: Meeting) -> Result<()>;

    /// Remove a meeting, returning whether anything was removed
    fn remove(&self, id: &MeetingId) -> Result<bool>;

    /// All meetings on the given civil date, in no particular order
    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Meeting>>;

    /// Every stored meeting, most recently booked first
    fn list_all(&self) -> Result<Vec<Meeting>>;
}

/// Source of collision-free meeting identifiers
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> MeetingId;
}
