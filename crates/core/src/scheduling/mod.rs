//! Slot generation and availability

pub mod availability;
pub mod slots;

pub use availability::{candidate_slots, resolve, Availability};
pub use slots::{default_slots, generate_slots};
