//! # AURA Core
//!
//! Pure scheduling logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - Month grid building and navigation
//! - Slot generation and per-date availability
//! - The meeting ledger and its port traits
//! - Upcoming/completed partitioning
//! - Booking form validation
//!
//! ## Architecture Principles
//! - Only depends on `aura-domain`
//! - No database, HTTP, or platform code
//! - Storage, clock and id generation via traits
//! - Synchronous; no suspension points

pub mod booking;
pub mod calendar;
pub mod dashboard;
pub mod ledger;
pub mod scheduler;
pub mod scheduling;

// Infrastructure ports
pub mod clock_ports;

pub use booking::{parse_participants, BookingController};
pub use calendar::{month_grid, MonthCursor};
pub use clock_ports::{Clock, FixedClock};
pub use dashboard::{partition, Dashboard, Partition};
pub use ledger::{
    IdGenerator, InMemoryMeetingStore, MeetingLedger, MeetingStore, SequentialIdGenerator,
};
pub use scheduler::SchedulerService;
pub use scheduling::{candidate_slots, generate_slots, resolve, Availability};
