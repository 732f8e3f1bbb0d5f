//! Typed failures of the employee/event store.
//!
//! Commands work with `anyhow::Result`, so these errors usually travel as
//! `anyhow::Error`; use `downcast_ref::<StoreError>()` to inspect them.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a {event_type} punch at {timestamp} already exists for employee {employee_id}")]
    DuplicateEvent {
        employee_id: i64,
        event_type: String,
        timestamp: NaiveDateTime,
    },

    #[error("PIN is already assigned to another employee")]
    PinTaken,

    #[error("PIN is reserved for the administrator")]
    ReservedPin,

    #[error("PIN must be exactly 4 digits")]
    InvalidPin,

    #[error("employee {0} not found")]
    EmployeeNotFound(i64),

    #[error("event {0} not found")]
    EventNotFound(i64),

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}
