//! Immutable copy of everything the reports need.
//!
//! The application never keeps live state between refreshes: each refresh
//! reads all employees and all punches, and reports are computed from that
//! copy.

use super::db::Db;
use super::employees::{self, Employees};
use super::events::{self, Events};
use crate::libs::employee::Employee;
use crate::libs::event::{wall_clock_now, ClockEvent, EventType};
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::Connection;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub employees: Vec<Employee>,
    pub events: Vec<ClockEvent>,
    pub taken_at: NaiveDateTime,
}

/// An employee whose latest punch is not an Exit.
#[derive(Debug, Clone, PartialEq)]
pub struct Presence {
    pub employee_id: i64,
    pub employee_name: String,
    pub last: ClockEvent,
}

impl Presence {
    pub fn on_break(&self) -> bool {
        self.last.event_type == EventType::BreakStart
    }
}

impl Snapshot {
    pub fn refresh() -> Result<Self> {
        Self::refresh_from(&Db::new()?)
    }

    pub fn refresh_from(db: &Db) -> Result<Self> {
        let snapshot = Self {
            employees: fetch_employees(&db.conn)?,
            events: fetch_events(&db.conn)?,
            taken_at: wall_clock_now(),
        };
        tracing::debug!(employees = snapshot.employees.len(), events = snapshot.events.len(), "snapshot refreshed");
        Ok(snapshot)
    }

    pub fn employee(&self, id: i64) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Employees currently on shift (working or on break), by name.
    pub fn presence(&self) -> Vec<Presence> {
        let mut last: HashMap<i64, &ClockEvent> = HashMap::new();
        for event in &self.events {
            let newer = last
                .get(&event.employee_id)
                .map_or(true, |current| (event.timestamp, event.id) > (current.timestamp, current.id));
            if newer {
                last.insert(event.employee_id, event);
            }
        }

        let mut present: Vec<Presence> = last
            .into_values()
            .filter(|e| e.event_type != EventType::Exit)
            .map(|e| Presence {
                employee_id: e.employee_id,
                employee_name: self.employee(e.employee_id).map_or_else(|| e.employee_name.clone(), |emp| emp.name.clone()),
                last: e.clone(),
            })
            .collect();
        present.sort_by(|a, b| a.employee_name.to_lowercase().cmp(&b.employee_name.to_lowercase()));
        present
    }
}

pub fn fetch_employees(conn: &Connection) -> Result<Vec<Employee>> {
    let mut stmt = conn.prepare(&format!("{} {}", employees::SELECT_COLUMNS, employees::ORDER_BY_NAME))?;
    let employees = stmt.query_map([], Employees::from_row)?.collect::<Result<Vec<_>, _>>()?;
    Ok(employees)
}

pub fn fetch_events(conn: &Connection) -> Result<Vec<ClockEvent>> {
    let mut stmt = conn.prepare(&format!("{} {}", events::SELECT_COLUMNS, events::ORDER_BY_TIME))?;
    let events = stmt.query_map([], Events::from_row)?.collect::<Result<Vec<_>, _>>()?;
    Ok(events)
}
