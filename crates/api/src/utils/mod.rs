//! Request logging and health helpers

pub mod health;
pub mod logging;
