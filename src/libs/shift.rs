//! Shift reconstruction from one employee's raw punches.
//!
//! A shift opens at an Entry and closes at the next Exit. Break punches in
//! between belong to the open shift. The input may arrive in any order; it is
//! sorted by timestamp first (stable, so equal timestamps keep input order).
//!
//! Every input punch lands in exactly one output group:
//!
//! - a shift still open at the end of input is emitted as a trailing group
//!   without an Exit;
//! - punches seen while no shift is open (an orphaned Exit, a break without an
//!   Entry) are gathered into a group of their own, which the work-hours
//!   calculator later reports as `no_entry`. Such a group is closed by an
//!   orphaned Exit or by the next Entry.
//!
//! A second Entry while a shift is open is governed by [`EntryPolicy`].

use crate::libs::event::{ClockEvent, EventType};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What to do with an Entry punch seen while a shift is already open.
#[derive(ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EntryPolicy {
    /// Append it to the open shift; both Entries end up in one shift.
    #[default]
    Merge,
    /// Emit the open shift as it is (it has no Exit) and start a new one.
    Split,
}

impl EntryPolicy {
    pub fn description(&self) -> &'static str {
        match self {
            EntryPolicy::Merge => "merge: a repeated Entry joins the open shift",
            EntryPolicy::Split => "split: a repeated Entry starts a new shift",
        }
    }
}

/// Groups punches into shifts with the default [`EntryPolicy::Merge`].
pub fn group_into_shifts(events: &[ClockEvent]) -> Vec<Vec<ClockEvent>> {
    group_into_shifts_with(events, EntryPolicy::Merge)
}

pub fn group_into_shifts_with(events: &[ClockEvent], policy: EntryPolicy) -> Vec<Vec<ClockEvent>> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.timestamp);

    let mut shifts = Vec::new();
    let mut current: Vec<ClockEvent> = Vec::new();
    let mut shift_open = false;

    for event in sorted {
        match (shift_open, event.event_type) {
            (false, EventType::Entry) => {
                // orphans gathered before this Entry form their own group
                if !current.is_empty() {
                    shifts.push(std::mem::take(&mut current));
                }
                current.push(event);
                shift_open = true;
            }
            (true, EventType::Entry) if policy == EntryPolicy::Split => {
                shifts.push(std::mem::take(&mut current));
                current.push(event);
            }
            (_, EventType::Exit) => {
                current.push(event);
                shifts.push(std::mem::take(&mut current));
                shift_open = false;
            }
            _ => current.push(event),
        }
    }

    if !current.is_empty() {
        shifts.push(current);
    }

    shifts
}

/// Convenience queries over one reconstructed shift.
pub trait ShiftEvents {
    fn has_entry(&self) -> bool;
    fn has_exit(&self) -> bool;
    fn first_of(&self, event_type: EventType) -> Option<&ClockEvent>;

    /// A shift with an Entry but no Exit is still open.
    fn is_open(&self) -> bool {
        self.has_entry() && !self.has_exit()
    }
}

impl ShiftEvents for [ClockEvent] {
    fn has_entry(&self) -> bool {
        self.iter().any(|e| e.event_type == EventType::Entry)
    }

    fn has_exit(&self) -> bool {
        self.iter().any(|e| e.event_type == EventType::Exit)
    }

    fn first_of(&self, event_type: EventType) -> Option<&ClockEvent> {
        self.iter().filter(|e| e.event_type == event_type).min_by_key(|e| e.timestamp)
    }
}
