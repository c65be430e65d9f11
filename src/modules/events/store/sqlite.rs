use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat};
use rusqlite::{Connection, Row, params};
use tokio::sync::Mutex;

use crate::modules::events::core::model::{Event, NewEvent};
use crate::modules::events::store::{EventStore, StoreError};

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    deadline TEXT NOT NULL,
    title TEXT NOT NULL,
    memo TEXT NOT NULL
)";

/// Relational backend. Deadlines are persisted as RFC3339 text so the
/// offset the client registered with survives a round trip. AUTOINCREMENT
/// keeps ids increasing even after a bulk delete.
pub struct SqliteEventStore {
    conn: Mutex<Connection>,
}

impl SqliteEventStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())?;
        Self::bootstrap(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(conn)
    }

    fn bootstrap(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA_SQL)?;
        tracing::debug!("sqlite event store ready");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

fn row_to_event(row: &Row<'_>) -> rusqlite::Result<(i64, String, String, String)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn parse_event(
    (id, deadline, title, memo): (i64, String, String, String),
) -> Result<Event, StoreError> {
    let deadline = DateTime::parse_from_rfc3339(&deadline)
        .map_err(|err| StoreError::InvalidData(format!("deadline of event {id}: {err}")))?;
    Ok(Event {
        id,
        deadline,
        title,
        memo,
    })
}

#[async_trait]
impl EventStore for SqliteEventStore {
    async fn create(&self, event: NewEvent) -> Result<i64, StoreError> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO events (deadline, title, memo) VALUES (?1, ?2, ?3)",
            params![
                event.deadline.to_rfc3339_opts(SecondsFormat::Secs, false),
                event.title,
                event.memo
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    async fn get(&self, id: i64) -> Result<Option<Event>, StoreError> {
        let conn = self.conn.lock().await;
        let mut stmt =
            conn.prepare("SELECT id, deadline, title, memo FROM events WHERE id = ?1")?;
        let mut rows = stmt.query_map(params![id], row_to_event)?;
        match rows.next() {
            Some(row) => Ok(Some(parse_event(row?)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Event>, StoreError> {
        let conn = self.conn.lock().await;
        let mut stmt =
            conn.prepare("SELECT id, deadline, title, memo FROM events ORDER BY id ASC")?;
        let rows = stmt.query_map([], row_to_event)?;
        let mut events = Vec::new();
        for row in rows {
            events.push(parse_event(row?)?);
        }
        Ok(events)
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().await;
        let deleted = conn.execute("DELETE FROM events", [])?;
        tracing::info!(deleted, "cleared event table");
        Ok(())
    }
}
