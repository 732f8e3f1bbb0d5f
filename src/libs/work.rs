//! Work-hours calculation for a single shift.
//!
//! The calculator walks the shift's punches in time order and accrues the
//! time between two consecutive punches only when the earlier one left the
//! employee working (Entry or BreakEnd). Break intervals are therefore
//! excluded without any pairing logic.
//!
//! ## Classification
//!
//! Checked in this order:
//!
//! 1. no Entry anywhere → [`WorkStatus::NoEntry`]
//! 2. still working at the last punch, or no Exit → [`WorkStatus::Incomplete`]
//! 3. negative accrued time → [`WorkStatus::Error`]
//! 4. otherwise → [`WorkStatus::Complete`]
//!
//! Only complete shifts carry hours and payment; every other status reports
//! zeros. Durations are integer milliseconds; hours and currency are `f64`
//! and are never rounded here, only when displayed.
//!
//! ```rust
//! use ponto::libs::config::PayConfig;
//! use ponto::libs::work::{calculate_work_details, WorkStatus};
//!
//! let details = calculate_work_details(&[], &PayConfig::default());
//! assert_eq!(details.status, WorkStatus::NoEntry);
//! ```

use crate::libs::config::{PayConfig, MS_PER_HOUR};
use crate::libs::event::{ClockEvent, EventType};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    Complete,
    Incomplete,
    Error,
    NoEntry,
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            WorkStatus::Complete => "Complete",
            WorkStatus::Incomplete => "Incomplete",
            WorkStatus::Error => "Error",
            WorkStatus::NoEntry => "No entry",
        };
        write!(f, "{}", label)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WorkDetails {
    pub total_ms: i64,
    pub normal_ms: i64,
    pub extra_ms: i64,
    pub normal_pay: f64,
    pub extra_pay: f64,
    pub payment: f64,
    pub status: WorkStatus,
}

impl WorkDetails {
    /// Details with every numeric field at zero.
    pub fn zero(status: WorkStatus) -> Self {
        Self {
            total_ms: 0,
            normal_ms: 0,
            extra_ms: 0,
            normal_pay: 0.0,
            extra_pay: 0.0,
            payment: 0.0,
            status,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status == WorkStatus::Complete
    }

    pub fn total_hours(&self) -> f64 {
        ms_to_hours(self.total_ms)
    }

    pub fn normal_hours(&self) -> f64 {
        ms_to_hours(self.normal_ms)
    }

    pub fn extra_hours(&self) -> f64 {
        ms_to_hours(self.extra_ms)
    }
}

pub fn ms_to_hours(ms: i64) -> f64 {
    ms as f64 / MS_PER_HOUR as f64
}

/// Computes worked time, the normal/overtime split and payment for one shift.
///
/// Never fails: malformed shifts come back with a non-complete status.
pub fn calculate_work_details(events: &[ClockEvent], pay: &PayConfig) -> WorkDetails {
    let mut sorted: Vec<&ClockEvent> = events.iter().collect();
    sorted.sort_by_key(|e| e.timestamp);

    let mut total_ms: i64 = 0;
    let mut last_time: Option<NaiveDateTime> = None;
    let mut is_working = false;

    for event in &sorted {
        if let (true, Some(last)) = (is_working, last_time) {
            total_ms += event.timestamp.signed_duration_since(last).num_milliseconds();
        }
        is_working = event.event_type.starts_work();
        last_time = Some(event.timestamp);
    }

    let has_entry = sorted.iter().any(|e| e.event_type == EventType::Entry);
    let has_exit = sorted.iter().any(|e| e.event_type == EventType::Exit);

    if !has_entry {
        return WorkDetails::zero(WorkStatus::NoEntry);
    }
    if is_working || !has_exit {
        return WorkDetails::zero(WorkStatus::Incomplete);
    }
    if total_ms < 0 {
        tracing::warn!(total_ms, "negative worked time in shift");
        return WorkDetails::zero(WorkStatus::Error);
    }

    split_and_price(total_ms, pay)
}

/// Splits a complete shift's worked time at the normal-hours threshold and prices both parts.
pub fn split_and_price(total_ms: i64, pay: &PayConfig) -> WorkDetails {
    let threshold = pay.normal_threshold_ms();
    let normal_ms = total_ms.min(threshold);
    let extra_ms = (total_ms - threshold).max(0);
    let normal_pay = ms_to_hours(normal_ms) * pay.normal_rate;
    let extra_pay = ms_to_hours(extra_ms) * pay.extra_rate;

    WorkDetails {
        total_ms,
        normal_ms,
        extra_ms,
        normal_pay,
        extra_pay,
        payment: normal_pay + extra_pay,
        status: WorkStatus::Complete,
    }
}
