//! Full backup and restore of employees and punches as one JSON document.
//!
//! Restore replaces all existing data inside a single transaction and keeps
//! the original ids, so punch ids referenced elsewhere stay valid. If any row
//! fails (a repeated PIN, a duplicate punch, a punch for an unknown employee)
//! nothing is changed.

use crate::db::db::Db;
use crate::db::snapshot::Snapshot;
use crate::libs::data_storage::APP_VERSION;
use crate::libs::employee::Employee;
use crate::libs::event::{wall_clock_now, ClockEvent};
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::params;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    pub version: String,
    pub created_at: NaiveDateTime,
    pub employees: Vec<Employee>,
    pub events: Vec<ClockEvent>,
}

impl Backup {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            version: APP_VERSION.to_string(),
            created_at: wall_clock_now(),
            employees: snapshot.employees.clone(),
            events: snapshot.events.clone(),
        }
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(format!("ponto_backup_{}.json", wall_clock_now().format("%Y%m%d_%H%M%S")))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Replaces the whole database content with this backup.
    pub fn restore(&self, db: &mut Db) -> Result<()> {
        let tx = db.conn.transaction()?;
        tx.execute("DELETE FROM events", [])?;
        tx.execute("DELETE FROM employees", [])?;

        for e in &self.employees {
            tx.execute(
                "INSERT INTO employees (id, name, pin, phone, tax_id, role, payment_key) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![e.id, e.name, e.pin, e.phone, e.tax_id, e.role, e.payment_key],
            )?;
        }
        for e in &self.events {
            tx.execute(
                "INSERT INTO events (id, employee_id, employee_name, event_type, timestamp) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![e.id, e.employee_id, e.employee_name, e.event_type.as_str(), e.timestamp],
            )?;
        }

        tx.commit()?;
        tracing::info!(employees = self.employees.len(), events = self.events.len(), "backup restored");
        Ok(())
    }
}
