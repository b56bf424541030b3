//! Error types used throughout the application

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::TimeSlot;

/// Main error type for AURA
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum AuraError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for AURA operations
pub type Result<T> = std::result::Result<T, AuraError>;

/// Failures raised by the scheduling engine.
///
/// Every variant except [`SchedulingError::Storage`] is a user-correctable
/// condition detected before the ledger is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "details")]
pub enum SchedulingError {
    #[error("Invalid slot range: {start}:00 to {end}:00")]
    InvalidRange { start: u32, end: u32 },

    #[error("Slot {time} on {date} is already booked")]
    SlotConflict { date: NaiveDate, time: TimeSlot },

    #[error("Slot {time} is not offered on {date}")]
    SlotUnavailable { date: NaiveDate, time: TimeSlot },

    #[error("Please enter a meeting title")]
    EmptyTitle,

    #[error("Please select a time")]
    NoTimeSelected,

    #[error("Invalid emails: {}", invalid.join(", "))]
    InvalidEmails { invalid: Vec<String> },

    #[error(transparent)]
    Storage(#[from] AuraError),
}

impl SchedulingError {
    /// Stable identifier for the error kind, used by logs and API payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } => "InvalidRange",
            Self::SlotConflict { .. } => "SlotConflict",
            Self::SlotUnavailable { .. } => "SlotUnavailable",
            Self::EmptyTitle => "EmptyTitle",
            Self::NoTimeSelected => "NoTimeSelected",
            Self::InvalidEmails { .. } => "InvalidEmails",
            Self::Storage(_) => "Storage",
        }
    }

    /// Whether the user can fix the condition by changing their input.
    pub fn is_user_correctable(&self) -> bool {
        !matches!(self, Self::Storage(_) | Self::InvalidRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_emails_message_names_every_offender() {
        let err = SchedulingError::InvalidEmails {
            invalid: vec!["alice@@x.com".to_string(), "bob".to_string()],
        };

        assert_eq!(err.to_string(), "Invalid emails: alice@@x.com, bob");
        assert_eq!(err.kind(), "InvalidEmails");
        assert!(err.is_user_correctable());
    }

    #[test]
    fn storage_errors_are_transparent() {
        let err: SchedulingError = AuraError::Database("database is locked".into()).into();

        assert_eq!(err.to_string(), "Database error: database is locked");
        assert!(!err.is_user_correctable());
    }

    #[test]
    fn slot_conflict_serializes_with_kind_tag() {
        let err = SchedulingError::SlotConflict {
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            time: "09:00".parse().unwrap(),
        };

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "SlotConflict");
        assert_eq!(json["details"]["date"], "2025-03-10");
        assert_eq!(json["details"]["time"], "09:00");
    }
}
