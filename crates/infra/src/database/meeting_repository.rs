//! SQLite-backed implementation of the `MeetingStore` port.
//!
//! Dates and times are stored as their `YYYY-MM-DD` and `HH:MM` labels and
//! participants as a JSON array. The table carries `UNIQUE(date, time)`, so a
//! second writer that slips past the ledger's check is still rejected.

use std::sync::Arc;

use aura_core::MeetingStore;
use aura_domain::constants::DATE_KEY_FORMAT;
use aura_domain::{date_key, Meeting, MeetingId, Result as DomainResult, TimeSlot};
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Row, ToSql};
use tracing::{debug, instrument};

use super::manager::{map_sql_error, DbManager, SqliteConnection};
use crate::errors::InfraError;

/// SQLite-backed meeting store.
#[derive(Debug)]
pub struct SqliteMeetingStore {
    db: Arc<DbManager>,
}

impl SqliteMeetingStore {
    /// Create a store backed by the shared `DbManager`.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    fn connection(&self) -> DomainResult<SqliteConnection> {
        self.db.get_connection()
    }
}

impl MeetingStore for SqliteMeetingStore {
    #[instrument(skip(self, meeting), fields(meeting_id = %meeting.id))]
    fn insert(&self, meeting: Meeting) -> DomainResult<()> {
        let conn = self.connection()?;
        let participants = serde_json::to_string(&meeting.participants).map_err(InfraError::from)?;

        conn.execute(
            MEETING_INSERT_SQL,
            params![
                meeting.id.as_str(),
                meeting.title,
                meeting.date_key(),
                meeting.time.to_string(),
                participants,
            ],
        )
        .map_err(map_sql_error)?;

        debug!("meeting row inserted");
        Ok(())
    }

    #[instrument(skip(self))]
    fn remove(&self, id: &MeetingId) -> DomainResult<bool> {
        let conn = self.connection()?;
        let deleted = conn.execute(MEETING_DELETE_SQL, params![id.as_str()]).map_err(map_sql_error)?;
        Ok(deleted > 0)
    }

    #[instrument(skip(self))]
    fn find_by_date(&self, date: NaiveDate) -> DomainResult<Vec<Meeting>> {
        let conn = self.connection()?;
        let key = date_key(date);
        let params: [&dyn ToSql; 1] = [&key];
        query_meetings(&conn, MEETING_BY_DATE_QUERY, &params)
    }

    #[instrument(skip(self))]
    fn list_all(&self) -> DomainResult<Vec<Meeting>> {
        let conn = self.connection()?;
        query_meetings(&conn, MEETING_ALL_QUERY, &[])
    }
}

const MEETING_INSERT_SQL: &str =
    "INSERT INTO meetings (id, title, date, time, participants) VALUES (?1, ?2, ?3, ?4, ?5)";

const MEETING_DELETE_SQL: &str = "DELETE FROM meetings WHERE id = ?1";

const MEETING_BY_DATE_QUERY: &str = "SELECT id, title, date, time, participants
    FROM meetings
    WHERE date = ?1
    ORDER BY seq DESC";

const MEETING_ALL_QUERY: &str = "SELECT id, title, date, time, participants
    FROM meetings
    ORDER BY seq DESC";

fn query_meetings(
    conn: &SqliteConnection,
    sql: &str,
    params: &[&dyn ToSql],
) -> DomainResult<Vec<Meeting>> {
    let mut stmt = conn.prepare(sql).map_err(map_sql_error)?;
    let rows = stmt.query_map(params, map_meeting_row).map_err(map_sql_error)?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(map_sql_error)
}

fn map_meeting_row(row: &Row<'_>) -> rusqlite::Result<Meeting> {
    let id: String = row.get(0)?;
    let date_raw: String = row.get(2)?;
    let time_raw: String = row.get(3)?;
    let participants_raw: String = row.get(4)?;

    let date = NaiveDate::parse_from_str(&date_raw, DATE_KEY_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;
    let time = time_raw
        .parse::<TimeSlot>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    let participants = serde_json::from_str::<Vec<String>>(&participants_raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

    Ok(Meeting { id: MeetingId::new(id), title: row.get(1)?, date, time, participants })
}
