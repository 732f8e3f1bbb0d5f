//! Clock events: the four punch types and the stored punch record.
//!
//! A punch carries the employee id together with the employee name cached at
//! the time it was recorded. Renaming an employee later does not touch the
//! cached name on historic punches.
//!
//! Timestamps are wall-clock `NaiveDateTime` values. They are stored and read
//! back exactly as entered and are never shifted between time zones.

use chrono::{Local, NaiveDateTime, SubsecRound};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Current local wall-clock time at whole-second precision, as punches record it.
pub fn wall_clock_now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// Type tag of a punch.
#[derive(ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Start of a shift.
    Entry,
    /// Start of a break inside a shift.
    BreakStart,
    /// End of a break, back to work.
    BreakEnd,
    /// End of a shift.
    Exit,
}

impl EventType {
    pub const ALL: [EventType; 4] = [EventType::Entry, EventType::BreakStart, EventType::BreakEnd, EventType::Exit];

    /// Storage code used in the database and in backups.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Entry => "entry",
            EventType::BreakStart => "break_start",
            EventType::BreakEnd => "break_end",
            EventType::Exit => "exit",
        }
    }

    /// Whether the employee is working after a punch of this type.
    pub fn starts_work(&self) -> bool {
        matches!(self, EventType::Entry | EventType::BreakEnd)
    }

    /// Checks the natural punch sequence: Entry → (BreakStart → BreakEnd)* → Exit.
    ///
    /// Used by the kiosk to warn about unusual punches. Out-of-sequence punches
    /// are still recorded.
    pub fn follows(&self, previous: Option<EventType>) -> bool {
        match (previous, self) {
            (None | Some(EventType::Exit), EventType::Entry) => true,
            (Some(EventType::Entry | EventType::BreakEnd), EventType::BreakStart | EventType::Exit) => true,
            (Some(EventType::BreakStart), EventType::BreakEnd) => true,
            _ => false,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            EventType::Entry => "Entry",
            EventType::BreakStart => "Break start",
            EventType::BreakEnd => "Break end",
            EventType::Exit => "Exit",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event type '{0}'")]
pub struct ParseEventTypeError(pub String);

impl FromStr for EventType {
    type Err = ParseEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseEventTypeError(s.to_string()))
    }
}

/// A stored punch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEvent {
    pub id: i64,
    pub employee_id: i64,
    /// Employee name as it was when the punch was recorded.
    pub employee_name: String,
    pub event_type: EventType,
    pub timestamp: NaiveDateTime,
}

/// A punch that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClockEvent {
    pub employee_id: i64,
    pub employee_name: String,
    pub event_type: EventType,
    pub timestamp: NaiveDateTime,
}

impl NewClockEvent {
    pub fn new(employee_id: i64, employee_name: &str, event_type: EventType, timestamp: NaiveDateTime) -> Self {
        Self {
            employee_id,
            employee_name: employee_name.to_string(),
            event_type,
            timestamp,
        }
    }
}

/// Identity of a punch for duplicate detection: two punches of one employee
/// with the same type and timestamp are the same punch.
pub trait DuplicateKey {
    fn duplicate_key(&self) -> (i64, EventType, NaiveDateTime);

    fn is_duplicate_of<T: DuplicateKey>(&self, other: &T) -> bool {
        self.duplicate_key() == other.duplicate_key()
    }
}

impl DuplicateKey for ClockEvent {
    fn duplicate_key(&self) -> (i64, EventType, NaiveDateTime) {
        (self.employee_id, self.event_type, self.timestamp)
    }
}

impl DuplicateKey for NewClockEvent {
    fn duplicate_key(&self) -> (i64, EventType, NaiveDateTime) {
        (self.employee_id, self.event_type, self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_codes_parse_back() {
        for t in EventType::ALL {
            assert_eq!(t.as_str().parse::<EventType>().unwrap(), t);
        }
        assert!("lunch".parse::<EventType>().is_err());
    }

    #[test]
    fn test_unknown_code_error() {
        let err = "lunch".parse::<EventType>().unwrap_err();
        assert_eq!(err, ParseEventTypeError("lunch".to_string()));

        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
        assert_eq!(boxed.to_string(), "unknown event type 'lunch'");
    }

    #[test]
    fn test_natural_sequence() {
        assert!(EventType::Entry.follows(None));
        assert!(EventType::Entry.follows(Some(EventType::Exit)));
        assert!(EventType::BreakStart.follows(Some(EventType::Entry)));
        assert!(EventType::BreakEnd.follows(Some(EventType::BreakStart)));
        assert!(EventType::Exit.follows(Some(EventType::BreakEnd)));
        assert!(!EventType::Entry.follows(Some(EventType::Entry)));
        assert!(!EventType::Exit.follows(Some(EventType::BreakStart)));
        assert!(!EventType::BreakEnd.follows(None));
    }
}
