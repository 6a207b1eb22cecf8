//! Parsing and validation of the optional expiration input.
//!
//! The input mirrors an HTML `datetime-local` field: a wall-clock date-time
//! without offset, interpreted in the viewer's time zone. Full RFC 3339
//! instants are accepted as well.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

use crate::error::EXPIRATION_NOT_IN_FUTURE;

/// Wall-clock shapes accepted for the expiration field.
const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpirationError {
    #[error("unrecognised expiration date '{0}'")]
    Unparseable(String),

    #[error("{}", EXPIRATION_NOT_IN_FUTURE)]
    NotInFuture,
}

/// Parses expiration input, resolving wall-clock values in `tz`.
///
/// # Errors
///
/// Returns [`ExpirationError::Unparseable`] for unknown shapes and for
/// wall-clock times that do not exist in `tz` (DST gaps).
pub fn parse_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<DateTime<Utc>, ExpirationError> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| ExpirationError::Unparseable(raw.to_string()))
}

/// Validates the expiration input against `now` in an explicit time zone.
///
/// Absent or blank input means "no expiration" and always passes.
///
/// # Errors
///
/// Returns [`ExpirationError::NotInFuture`] unless the resolved instant is
/// strictly later than `now`, or [`ExpirationError::Unparseable`] if the
/// input cannot be resolved at all.
pub fn validate_expiration_in<Tz: TimeZone>(
    raw: Option<&str>,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Result<Option<DateTime<Utc>>, ExpirationError> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Ok(None);
    };

    let expires_at = parse_in(raw, tz)?;
    if expires_at <= now {
        return Err(ExpirationError::NotInFuture);
    }

    Ok(Some(expires_at))
}

/// Validates the expiration input in the viewer's local time zone.
pub fn validate_expiration(
    raw: Option<&str>,
    now: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>, ExpirationError> {
    validate_expiration_in(raw, now, &Local)
}

/// Returns true if the input is absent or resolves to an instant after `now`.
pub fn is_valid_expiration(raw: Option<&str>, now: DateTime<Utc>) -> bool {
    validate_expiration(raw, now).is_ok()
}
