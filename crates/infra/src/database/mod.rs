//! Database implementations

pub mod manager;
pub mod meeting_repository;

pub use manager::*;
pub use meeting_repository::*;
