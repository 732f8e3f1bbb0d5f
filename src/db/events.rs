//! Clock event records.
//!
//! An event is rejected when the same employee already has a punch of the
//! same type at the same timestamp. The check runs before the insert so the
//! caller gets [`StoreError::DuplicateEvent`]; the table's UNIQUE constraint
//! backs it up.

use super::db::Db;
use super::error::StoreError;
use crate::libs::event::{ClockEvent, EventType, NewClockEvent};
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, types::Type, Connection, OptionalExtension, Row};

const INSERT_EVENT: &str = "INSERT INTO events (employee_id, employee_name, event_type, timestamp) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_EVENT: &str = "UPDATE events SET event_type = ?2, timestamp = ?3 WHERE id = ?1";
const DELETE_EVENT: &str = "DELETE FROM events WHERE id = ?1";
pub(crate) const SELECT_COLUMNS: &str = "SELECT id, employee_id, employee_name, event_type, timestamp FROM events";
pub(crate) const ORDER_BY_TIME: &str = "ORDER BY timestamp, id";
const SELECT_DUPLICATE: &str = "SELECT id FROM events WHERE employee_id = ?1 AND event_type = ?2 AND timestamp = ?3";
const EMPLOYEE_EXISTS: &str = "SELECT 1 FROM employees WHERE id = ?1";

pub struct Events {
    conn: Connection,
}

impl Events {
    pub fn new() -> Result<Self> {
        Ok(Self::with(Db::new()?))
    }

    pub fn with(db: Db) -> Self {
        Self { conn: db.conn }
    }

    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<ClockEvent> {
        let event_type: String = row.get(3)?;
        Ok(ClockEvent {
            id: row.get(0)?,
            employee_id: row.get(1)?,
            employee_name: row.get(2)?,
            event_type: event_type
                .parse::<EventType>()
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?,
            timestamp: row.get(4)?,
        })
    }

    fn find_duplicate(&self, employee_id: i64, event_type: EventType, timestamp: NaiveDateTime) -> Result<Option<i64>, StoreError> {
        Ok(self
            .conn
            .query_row(SELECT_DUPLICATE, params![employee_id, event_type.as_str(), timestamp], |row| row.get(0))
            .optional()?)
    }

    /// Stores a punch. Fails with [`StoreError::DuplicateEvent`] on an exact
    /// repeat and [`StoreError::EmployeeNotFound`] for an unknown employee.
    pub fn insert(&mut self, event: &NewClockEvent) -> Result<ClockEvent> {
        let exists = self.conn.query_row(EMPLOYEE_EXISTS, params![event.employee_id], |_| Ok(())).optional()?;
        if exists.is_none() {
            return Err(StoreError::EmployeeNotFound(event.employee_id).into());
        }

        if self.find_duplicate(event.employee_id, event.event_type, event.timestamp)?.is_some() {
            tracing::warn!(employee_id = event.employee_id, event_type = %event.event_type, timestamp = %event.timestamp, "duplicate punch rejected");
            return Err(StoreError::DuplicateEvent {
                employee_id: event.employee_id,
                event_type: event.event_type.to_string(),
                timestamp: event.timestamp,
            }
            .into());
        }

        self.conn.execute(
            INSERT_EVENT,
            params![event.employee_id, event.employee_name, event.event_type.as_str(), event.timestamp],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, employee_id = event.employee_id, event_type = %event.event_type, "punch recorded");

        self.fetch_by_id(id)?.ok_or_else(|| StoreError::EventNotFound(id).into())
    }

    /// Changes the type and timestamp of a stored punch, keeping the duplicate rule.
    pub fn update(&mut self, id: i64, event_type: EventType, timestamp: NaiveDateTime) -> Result<ClockEvent> {
        let existing = self.fetch_by_id(id)?.ok_or(StoreError::EventNotFound(id))?;

        match self.find_duplicate(existing.employee_id, event_type, timestamp)? {
            Some(other) if other != id => {
                return Err(StoreError::DuplicateEvent {
                    employee_id: existing.employee_id,
                    event_type: event_type.to_string(),
                    timestamp,
                }
                .into())
            }
            _ => {}
        }

        self.conn.execute(UPDATE_EVENT, params![id, event_type.as_str(), timestamp])?;
        tracing::debug!(id, "punch edited");

        self.fetch_by_id(id)?.ok_or_else(|| StoreError::EventNotFound(id).into())
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_EVENT, params![id])?;
        if affected == 0 {
            return Err(StoreError::EventNotFound(id).into());
        }
        tracing::debug!(id, "punch deleted");
        Ok(())
    }

    /// Every punch, ordered by timestamp then id.
    pub fn fetch_all(&self) -> Result<Vec<ClockEvent>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_COLUMNS, ORDER_BY_TIME))?;
        let events = stmt.query_map([], Self::from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(events)
    }

    pub fn fetch_by_employee(&self, employee_id: i64) -> Result<Vec<ClockEvent>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE employee_id = ?1 {}", SELECT_COLUMNS, ORDER_BY_TIME))?;
        let events = stmt.query_map(params![employee_id], Self::from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(events)
    }

    pub fn fetch_by_id(&self, id: i64) -> Result<Option<ClockEvent>> {
        let event = self
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_COLUMNS), params![id], Self::from_row)
            .optional()?;
        Ok(event)
    }

    /// The employee's latest punch by timestamp.
    pub fn last_for_employee(&self, employee_id: i64) -> Result<Option<ClockEvent>> {
        let event = self
            .conn
            .query_row(
                &format!("{} WHERE employee_id = ?1 ORDER BY timestamp DESC, id DESC LIMIT 1", SELECT_COLUMNS),
                params![employee_id],
                Self::from_row,
            )
            .optional()?;
        Ok(event)
    }
}
