//! Persistence layer built on SQLite.
//!
//! Employees and punches live in one database file in the platform data
//! directory. Opening a [`db::Db`] enables foreign keys (deleting an employee
//! cascades to their punches) and applies pending [`migrations`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ponto::db::{employees::Employees, events::Events};
//! use ponto::libs::employee::NewEmployee;
//! use ponto::libs::event::{wall_clock_now, EventType, NewClockEvent};
//!
//! let ana = Employees::new()?.insert(&NewEmployee::new("Ana", "1234", "555-0100"))?;
//! Events::new()?.insert(&NewClockEvent::new(ana.id, &ana.name, EventType::Entry, wall_clock_now()))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection setup: file location, foreign keys, migrations.
pub mod db;

/// Typed store failures such as duplicate punches and PIN conflicts.
pub mod error;

/// Versioned schema changes.
pub mod migrations;

/// Employee CRUD with PIN rules.
pub mod employees;

/// Punch CRUD with duplicate rejection.
pub mod events;

/// Read-only copy of all employees and punches for reporting.
pub mod snapshot;
