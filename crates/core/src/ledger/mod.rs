//! Meeting ledger and its persistence ports

pub mod memory;
pub mod ports;
pub mod service;

pub use memory::{InMemoryMeetingStore, SequentialIdGenerator};
pub use ports::{IdGenerator, MeetingStore};
pub use service::MeetingLedger;
