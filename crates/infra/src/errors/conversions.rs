//! Conversions from external infrastructure errors into domain errors.

use aura_domain::AuraError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub AuraError);

impl From<InfraError> for AuraError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<AuraError> for InfraError {
    fn from(value: AuraError) -> Self {
        InfraError(value)
    }
}

trait IntoAuraError {
    fn into_aura(self) -> AuraError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → AuraError */
/* -------------------------------------------------------------------------- */

/// `SQLITE_CONSTRAINT_UNIQUE`
const SQLITE_CONSTRAINT_UNIQUE: i32 = 2067;
/// `SQLITE_CONSTRAINT_PRIMARYKEY`
const SQLITE_CONSTRAINT_PRIMARYKEY: i32 = 1555;

impl IntoAuraError for SqlError {
    fn into_aura(self) -> AuraError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => AuraError::Database("database is busy".into()),
                    (ErrorCode::DatabaseLocked, _) => {
                        AuraError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, SQLITE_CONSTRAINT_UNIQUE) => {
                        AuraError::Conflict(format!("unique constraint violation: {message}"))
                    }
                    (ErrorCode::ConstraintViolation, SQLITE_CONSTRAINT_PRIMARYKEY) => {
                        AuraError::Conflict(format!("duplicate primary key: {message}"))
                    }
                    _ => AuraError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => AuraError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                AuraError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                AuraError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => AuraError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => AuraError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_aura())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → AuraError */
/* -------------------------------------------------------------------------- */

impl IntoAuraError for r2d2::Error {
    fn into_aura(self) -> AuraError {
        AuraError::Database(format!("connection pool error: {self}"))
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(value.into_aura())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → AuraError */
/* -------------------------------------------------------------------------- */

impl IntoAuraError for serde_json::Error {
    fn into_aura(self) -> AuraError {
        AuraError::Database(format!("malformed stored JSON: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_aura())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
