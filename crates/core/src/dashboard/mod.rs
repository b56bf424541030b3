//! Dashboard view of the ledger split by time

pub mod partition;

use aura_domain::{Meeting, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use partition::{partition, phase_of, Partition};

use crate::clock_ports::Clock;
use crate::ledger::MeetingLedger;

/// Upcoming and completed meetings as of `now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub upcoming: Vec<Meeting>,
    pub completed: Vec<Meeting>,
    pub now: NaiveDateTime,
}

impl Dashboard {
    /// Snapshot the ledger. The clock is read once for the whole pass.
    pub fn capture(ledger: &MeetingLedger, clock: &dyn Clock) -> Result<Self> {
        let now = clock.now();
        let meetings = ledger.all()?;
        let Partition { upcoming, completed } = partition(&meetings, now);

        debug!(%now, upcoming = upcoming.len(), completed = completed.len(), "dashboard captured");
        Ok(Self { upcoming, completed, now })
    }
}
