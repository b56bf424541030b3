//! Liveness handler

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::context::AppContext;
use crate::utils::health::HealthStatus;
use crate::utils::logging::log_request_outcome;

/// 200 when healthy, 503 otherwise; the body is the full report either way.
pub async fn health(State(ctx): State<Arc<AppContext>>) -> (StatusCode, Json<HealthStatus>) {
    let start = Instant::now();
    let status = ctx.health_check().await;
    let error_type = (!status.is_healthy).then_some("unhealthy");
    log_request_outcome("health::check", start.elapsed(), error_type);

    let code = if status.is_healthy { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (code, Json(status))
}
