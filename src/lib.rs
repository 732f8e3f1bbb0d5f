//! # Ponto - employee time clock
//!
//! Employees punch Entry, Break start, Break end and Exit with their PIN; an
//! administrator manages employees, reviews and edits punches, and computes
//! payable hours (normal and overtime) for a date range, with CSV export.
//!
//! ## Features
//!
//! - **Kiosk punches**: PIN lookup, duplicate rejection, out-of-sequence warnings
//! - **Shift reconstruction**: shifts across midnight, multiple breaks, open shifts
//! - **Work hours**: breaks excluded, normal/overtime split, configurable rates
//! - **Reports**: period summary, per-shift status, per-day CSV with totals
//! - **Administration**: employee CRUD and CSV import, punch editing, backups
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ponto::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
