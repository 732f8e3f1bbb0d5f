//! Display helpers for durations, hours and money.
//!
//! Rounding happens here and nowhere else: the calculator and the aggregator
//! keep full precision, and values are rounded only when turned into text.
//!
//! ```rust
//! use ponto::libs::formatter::{format_currency, format_ms};
//!
//! assert_eq!(format_ms(9_000_000), "02:30");
//! assert_eq!(format_currency(97.80000000000001), "97.80");
//! ```

use chrono::{NaiveDate, NaiveDateTime};

/// Milliseconds as `HH:MM`. Hours are not wrapped at 24; seconds are
/// truncated; negative values show as `00:00`.
pub fn format_ms(ms: i64) -> String {
    let minutes = ms.max(0) / 60_000;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Decimal hours with two places, e.g. `8.50`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

pub fn format_currency(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Time of day, with the date prepended when it differs from `day`
/// (a shift that ends after midnight).
pub fn format_time_on(timestamp: &NaiveDateTime, day: NaiveDate) -> String {
    if timestamp.date() == day {
        timestamp.format("%H:%M").to_string()
    } else {
        timestamp.format("%Y-%m-%d %H:%M").to_string()
    }
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}
