//! Core library modules for the ponto application.
//!
//! - **Domain**: punches ([`event`]), employees ([`employee`])
//! - **Computation**: shift reconstruction ([`shift`]), work hours ([`work`]),
//!   period aggregation and report rows ([`period`])
//! - **Input/output**: CSV/JSON export ([`export`]), employee import ([`import`]),
//!   backups ([`backup`]), terminal tables ([`view`]), display helpers ([`formatter`])
//! - **Infrastructure**: configuration ([`config`]), data directory
//!   ([`data_storage`]), user messages ([`messages`])
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ponto::db::snapshot::Snapshot;
//! use ponto::libs::config::Config;
//! use ponto::libs::period::{summarize_period, EmployeeFilter, Period, ReportOptions};
//! use chrono::NaiveDate;
//!
//! let snapshot = Snapshot::refresh()?;
//! let options = ReportOptions::from(&Config::read()?);
//! let period = Period::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
//! let summary = summarize_period(&snapshot.events, &period, EmployeeFilter::All, &options);
//! println!("Payment: {:.2}", summary.payment);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod backup;
pub mod config;
pub mod data_storage;
pub mod employee;
pub mod event;
pub mod export;
pub mod formatter;
pub mod import;
pub mod messages;
pub mod period;
pub mod shift;
pub mod view;
pub mod work;
