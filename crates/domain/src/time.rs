//! Timestamp helpers for room bookkeeping.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// UTC timestamp stamped on rooms when created and updated.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time, truncated to microseconds so that it
/// survives a round trip through [`to_rfc3339`] unchanged.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}

/// Render a timestamp as RFC 3339 with microsecond precision.
///
/// The fixed precision keeps stored values lexicographically sortable.
#[must_use]
pub fn to_rfc3339(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse an RFC 3339 timestamp into UTC.
///
/// # Errors
///
/// Returns [`chrono::ParseError`] when `value` is not valid RFC 3339.
pub fn parse_rfc3339(value: &str) -> Result<Timestamp, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|dt| dt.to_utc())
}
