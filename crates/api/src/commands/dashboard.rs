//! Upcoming/completed dashboard handler

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use aura_core::Dashboard;

use super::blocking;
use crate::context::AppContext;
use crate::errors::ApiError;

pub async fn dashboard(State(ctx): State<Arc<AppContext>>) -> Result<Json<Dashboard>, ApiError> {
    let scheduler = Arc::clone(&ctx.scheduler);

    blocking("dashboard::get", move || Ok(scheduler.dashboard()?)).await.map(Json)
}
