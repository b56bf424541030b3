//! Shared test helpers for `aura-core` integration tests.
//!
//! Fixtures pin the clock and id source so scenarios are deterministic, and
//! the repository mocks cover store behaviour the in-memory adapter cannot.

#![allow(dead_code)]

pub mod fixtures;
pub mod repositories;
