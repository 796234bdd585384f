//! Timestamp Rendering
//!
//! Events are stamped with wall-clock UTC instants and rendered as ISO-8601
//! strings at the serialization boundary.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use disaster_events::{format_timestamp, parse_timestamp};
//!
//! let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
//! let text = format_timestamp(ts);
//! assert_eq!(text, "2024-03-01T12:30:00.000000Z");
//! assert_eq!(parse_timestamp(&text).unwrap(), ts);
//! ```

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

use crate::event::EventError;

/// Renders an instant as ISO-8601 with microsecond precision and a `Z` suffix.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parses an ISO-8601 timestamp.
///
/// Accepts RFC 3339 strings with an offset, and offset-less local forms
/// (`2024-03-01T12:30:00.123456`), which are taken to be UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, EventError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| EventError::InvalidTimestamp(s.to_string()))
}
