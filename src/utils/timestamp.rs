//! Tolerant instant parsing and local-time rendering for statistics payloads.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Display format used for timestamps in the viewer's local time.
pub const LOCAL_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Naive shapes some backends emit; interpreted as UTC.
const NAIVE_UTC_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised timestamp '{0}'")]
pub struct TimestampError(pub String);

/// Parses a timestamp into an absolute instant.
///
/// Accepts RFC 3339 (`2024-01-01T00:00:00Z`, `2024-01-01T02:00:00+02:00`) and,
/// as a fallback, offset-less date-times which are taken to be UTC.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NAIVE_UTC_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| TimestampError(raw.to_string()))
}

/// Renders an instant in the viewer's local time zone.
pub fn format_local(instant: &DateTime<Utc>) -> String {
    format_in(instant, &Local)
}

/// Renders an instant in an explicit time zone.
pub fn format_in<Tz>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    instant
        .with_timezone(tz)
        .format(LOCAL_DISPLAY_FORMAT)
        .to_string()
}
