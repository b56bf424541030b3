//! Observability infrastructure
//!
//! Tracing subscriber setup for the binary. Modules log through `tracing`
//! macros with structured fields; this module decides where those go.

pub mod logging;

pub use logging::{build_filter, init_tracing};
