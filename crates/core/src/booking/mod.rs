//! Booking form handling

pub mod controller;
pub mod participants;

pub use controller::BookingController;
pub use participants::{is_valid_email, parse_participants};
