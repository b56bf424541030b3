//! HTTP handlers

pub mod calendar;
pub mod dashboard;
pub mod health;
pub mod meetings;

use std::time::Instant;

use aura_domain::constants::DATE_KEY_FORMAT;
use aura_domain::AuraError;
use chrono::NaiveDate;

pub use calendar::{month_view, slots};
pub use dashboard::dashboard;
pub use health::health;
pub use meetings::{cancel_meeting, create_meeting, list_meetings};

use crate::errors::ApiError;
use crate::utils::logging::log_request_outcome;

/// Run a scheduler call on the blocking pool and log its outcome.
///
/// Ledger calls may hit SQLite, so they never run on the async workers.
pub(crate) async fn blocking<T, F>(command: &'static str, f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    let start = Instant::now();

    let result = match tokio::task::spawn_blocking(f).await {
        Ok(result) => result,
        Err(e) => Err(ApiError::Internal(format!("{command} task failed: {e}"))),
    };

    log_request_outcome(command, start.elapsed(), result.as_ref().err().map(ApiError::label));
    result
}

/// Parse a `YYYY-MM-DD` query parameter.
pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_KEY_FORMAT)
        .map_err(|e| AuraError::InvalidInput(format!("Invalid date {raw:?}: {e}")).into())
}
