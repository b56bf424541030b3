//! HTTP error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use aura_domain::{AuraError, SchedulingError};
use serde::Serialize;
use thiserror::Error;

use crate::utils::logging::{error_label, scheduling_error_label};

/// Errors returned by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Scheduling(#[from] SchedulingError),

    #[error(transparent)]
    Domain(#[from] AuraError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid: Option<Vec<String>>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Scheduling(err) => match err {
                SchedulingError::EmptyTitle
                | SchedulingError::NoTimeSelected
                | SchedulingError::InvalidEmails { .. }
                | SchedulingError::InvalidRange { .. } => StatusCode::BAD_REQUEST,
                SchedulingError::SlotConflict { .. } => StatusCode::CONFLICT,
                SchedulingError::SlotUnavailable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                SchedulingError::Storage(inner) => domain_status(inner),
            },
            Self::Domain(err) => domain_status(err),
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable kind identifier for the `error` field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scheduling(SchedulingError::Storage(inner)) | Self::Domain(inner) => {
                domain_kind(inner)
            }
            Self::Scheduling(err) => err.kind(),
            Self::BadRequest(_) => "BadRequest",
            Self::Internal(_) => "Internal",
        }
    }

    /// Snake-case label for the `error_type` log field
    pub fn label(&self) -> &'static str {
        match self {
            Self::Scheduling(err) => scheduling_error_label(err),
            Self::Domain(err) => error_label(err),
            Self::BadRequest(_) => "bad_request",
            Self::Internal(_) => "internal",
        }
    }

    fn body(&self) -> ErrorBody {
        let invalid = match self {
            Self::Scheduling(SchedulingError::InvalidEmails { invalid }) => Some(invalid.clone()),
            _ => None,
        };
        ErrorBody { error: self.kind(), message: self.to_string(), invalid }
    }
}

fn domain_status(err: &AuraError) -> StatusCode {
    match err {
        AuraError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        AuraError::NotFound(_) => StatusCode::NOT_FOUND,
        AuraError::Conflict(_) => StatusCode::CONFLICT,
        AuraError::Database(_) | AuraError::Config(_) | AuraError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn domain_kind(err: &AuraError) -> &'static str {
    match err {
        AuraError::Database(_) => "Database",
        AuraError::Config(_) => "Config",
        AuraError::NotFound(_) => "NotFound",
        AuraError::Conflict(_) => "Conflict",
        AuraError::InvalidInput(_) => "InvalidInput",
        AuraError::Internal(_) => "Internal",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, kind = self.kind(), "request failed");
        }
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn scheduling_errors_map_to_documented_statuses() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let time = "09:30".parse().unwrap();

        assert_eq!(ApiError::from(SchedulingError::EmptyTitle).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(SchedulingError::SlotConflict { date, time }).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(SchedulingError::SlotUnavailable { date, time }).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(SchedulingError::Storage(AuraError::Database("locked".into()))).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn invalid_emails_body_lists_offenders() {
        let err = ApiError::from(SchedulingError::InvalidEmails { invalid: vec!["bob".into()] });

        let body = serde_json::to_value(err.body()).unwrap();

        assert_eq!(body["error"], "InvalidEmails");
        assert_eq!(body["message"], "Invalid emails: bob");
        assert_eq!(body["invalid"][0], "bob");
    }

    #[test]
    fn log_labels_follow_the_wrapped_error() {
        assert_eq!(ApiError::from(SchedulingError::NoTimeSelected).label(), "no_time_selected");
        assert_eq!(ApiError::from(AuraError::NotFound("m_1".into())).label(), "not_found");
        assert_eq!(
            ApiError::from(SchedulingError::Storage(AuraError::Database("locked".into()))).label(),
            "database"
        );
        assert_eq!(ApiError::BadRequest("bad json".into()).label(), "bad_request");
    }

    #[test]
    fn storage_errors_report_the_underlying_kind() {
        let err = ApiError::from(SchedulingError::Storage(AuraError::Database("locked".into())));

        let body = serde_json::to_value(err.body()).unwrap();

        assert_eq!(body["error"], "Database");
        assert!(body.get("invalid").is_none());
    }
}
