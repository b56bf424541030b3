//! # AURA API
//!
//! HTTP application layer - handlers, router and main entry point.
//!
//! This crate contains:
//! - axum handlers over the scheduler
//! - Application context (dependency injection)
//! - Error to status mapping
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Ledger calls run on the blocking pool

pub mod commands;
pub mod context;
pub mod errors;
pub mod utils;

use std::sync::Arc;

use axum::routing::{delete, get};
use axum::Router;

pub use context::AppContext;
pub use errors::ApiError;

/// Build the application router.
///
/// Endpoints:
/// - GET    /health
/// - GET    /api/calendar?month=YYYY-MM&selected=YYYY-MM-DD
/// - GET    /api/slots?date=YYYY-MM-DD
/// - GET    /api/meetings?date=YYYY-MM-DD
/// - POST   /api/meetings
/// - DELETE /api/meetings/{id}
/// - GET    /api/dashboard
pub fn router(ctx: Arc<AppContext>) -> Router {
    let api_routes = Router::new()
        .route("/calendar", get(commands::month_view))
        .route("/slots", get(commands::slots))
        .route("/meetings", get(commands::list_meetings).post(commands::create_meeting))
        .route("/meetings/{id}", delete(commands::cancel_meeting))
        .route("/dashboard", get(commands::dashboard));

    Router::new()
        .route("/health", get(commands::health))
        .nest("/api", api_routes)
        .with_state(ctx)
}
