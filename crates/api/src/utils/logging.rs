use std::time::Duration;

use aura_domain::{AuraError, SchedulingError};
use tracing::{info, warn};

/// Log the outcome of a request with structured fields.
///
/// `command` is a stable route identifier such as `"meetings::create"`;
/// never pass user input through it. `error_type` is `None` on success.
#[inline]
pub fn log_request_outcome(command: &str, elapsed: Duration, error_type: Option<&str>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error_type {
        None => info!(command, duration_ms, "request_success"),
        Some(error_type) => warn!(command, duration_ms, error_type, "request_failure"),
    }
}

/// Convert an `AuraError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &AuraError) -> &'static str {
    match error {
        AuraError::Database(_) => "database",
        AuraError::Config(_) => "config",
        AuraError::NotFound(_) => "not_found",
        AuraError::Conflict(_) => "conflict",
        AuraError::InvalidInput(_) => "invalid_input",
        AuraError::Internal(_) => "internal",
    }
}

/// Label for a scheduling failure; storage failures use the wrapped error's label.
#[inline]
pub fn scheduling_error_label(error: &SchedulingError) -> &'static str {
    match error {
        SchedulingError::InvalidRange { .. } => "invalid_range",
        SchedulingError::SlotConflict { .. } => "slot_conflict",
        SchedulingError::SlotUnavailable { .. } => "slot_unavailable",
        SchedulingError::EmptyTitle => "empty_title",
        SchedulingError::NoTimeSelected => "no_time_selected",
        SchedulingError::InvalidEmails { .. } => "invalid_emails",
        SchedulingError::Storage(inner) => error_label(inner),
    }
}
