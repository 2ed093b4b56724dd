//! Date and time parsing helpers shared by every command.
//!
//! All tracked instants are stored UTC-normalized with whole-second
//! precision; wall-clock input from the user is interpreted in the host's
//! local timezone and converted on the way in. User-facing input accepts
//! three progressively looser formats so a precise timestamp and a bare
//! clock time for "today" both work without extra flags:
//!
//! 1. A full RFC 3339 datetime with an explicit offset (`2025-07-01T09:00:00+02:00`)
//! 2. A naive datetime reinterpreted in the fallback's timezone (`2025-07-01T09:00:00`)
//! 3. A bare `HH:MM` combined with the fallback's calendar date (`09:00`)

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, TimeZone, Utc};
use thiserror::Error;

/// Failure to interpret a user-supplied date or time string.
#[derive(Debug, Error)]
pub enum TimeError {
    #[error("invalid date or time format: '{0}'")]
    InvalidFormat(String),
}

/// Current UTC time truncated to whole seconds.
///
/// Sub-second precision is dropped everywhere so that formatted and
/// re-parsed instants always compare equal.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Current host-local time truncated to whole seconds.
pub fn now_local() -> DateTime<Local> {
    Local::now().trunc_subsecs(0)
}

/// Parses a `YYYY-MM-DD` date string.
pub fn parse_date(value: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| TimeError::InvalidFormat(value.to_string()))
}

/// Parses a 24-hour `H:MM` or `HH:MM` time-of-day string.
///
/// Hours above 23 and minutes above 59 are rejected along with anything
/// that does not match the pattern.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, TimeError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| TimeError::InvalidFormat(value.to_string()))
}

/// Parses a user-supplied point in time, falling back when empty.
///
/// An empty `value` returns `fallback` unchanged. Otherwise the three
/// formats listed in the module docs are tried in order; naive datetimes
/// and bare clock times are interpreted in `fallback`'s timezone, with
/// the clock-time form borrowing `fallback`'s calendar date.
pub fn parse_when(value: &str, fallback: DateTime<Local>) -> Result<DateTime<Local>, TimeError> {
    if value.is_empty() {
        return Ok(fallback);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Local));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return local_datetime(naive).ok_or_else(|| TimeError::InvalidFormat(value.to_string()));
    }

    let time_of_day = parse_time_of_day(value)?;
    let naive = fallback.date_naive().and_time(time_of_day);
    local_datetime(naive).ok_or_else(|| TimeError::InvalidFormat(value.to_string()))
}

/// Resolves a naive wall-clock datetime in the host's local timezone.
///
/// Returns `None` only for wall-clock times skipped by a DST transition.
pub fn local_datetime(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    Local.from_local_datetime(&naive).earliest()
}

/// Re-expresses the same instant in UTC.
pub fn to_utc(value: DateTime<Local>) -> DateTime<Utc> {
    value.with_timezone(&Utc)
}

/// First instant of `date` in the host's local timezone.
pub fn local_day_start(date: NaiveDate) -> Option<DateTime<Local>> {
    local_datetime(date.and_time(NaiveTime::MIN))
}

/// Last tracked second of `date` in the host's local timezone.
pub fn local_day_end(date: NaiveDate) -> Option<DateTime<Local>> {
    date.and_hms_opt(23, 59, 59).and_then(local_datetime)
}
