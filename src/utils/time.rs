//! Time and timestamp utilities

use chrono::{DateTime, Local, TimeZone, Utc};

/// Get current Unix timestamp in seconds
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Hour:minute label in the server's local timezone, as stamped on chat lines
pub fn clock_label() -> String {
    format_clock(&Local::now())
}

/// Format any zoned time as a zero-padded 24h `HH:MM`
pub fn format_clock<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format("%H:%M").to_string()
}
