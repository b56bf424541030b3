//! # AURA Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - SQLite meeting store (r2d2 pool)
//! - System clock and UUID id generation
//! - Configuration loading (environment, JSON, TOML)
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `aura-core`
//! - Depends on `aura-domain` and `aura-core`
//! - Contains all "impure" code (I/O, wall clock, environment)

pub mod clock;
pub mod config;
pub mod database;
pub mod errors;
pub mod ids;
pub mod observability;

// Re-export commonly used items
pub use clock::SystemClock;
pub use database::{DbManager, SqliteMeetingStore};
pub use errors::InfraError;
pub use ids::UuidIdGenerator;
