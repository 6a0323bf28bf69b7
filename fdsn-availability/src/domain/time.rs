//! Timestamp handling for availability extents.
//!
//! FDSN services write instants as ISO-8601 text in UTC, usually with a
//! trailing `Z` and up to microsecond precision, e.g.
//! `2019-01-01T00:00:00.019500Z`. Comparisons keep the full precision;
//! only the final report truncates to the calendar date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::fmt;

/// Error returned when parsing an invalid timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// An instant in UTC, as reported by the availability service.
///
/// # Examples
///
/// ```
/// use fdsn_availability::domain::Timestamp;
///
/// let t = Timestamp::parse("2020-01-01T12:30:00.5Z").unwrap();
/// assert_eq!(t.date().to_string(), "2020-01-01");
///
/// assert!(Timestamp::parse("yesterday").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Parse a timestamp from service text.
    ///
    /// Accepts, in order of preference:
    /// - RFC 3339 with an explicit offset (normalised to UTC)
    /// - `YYYY-MM-DDTHH:MM:SS[.f]` with an optional trailing `Z`
    /// - a bare `YYYY-MM-DD`, taken as midnight UTC
    ///
    /// # Examples
    ///
    /// ```
    /// use fdsn_availability::domain::Timestamp;
    ///
    /// assert!(Timestamp::parse("2020-06-01T00:00:00").is_ok());
    /// assert!(Timestamp::parse("2020-06-01T00:00:00.019500Z").is_ok());
    /// assert!(Timestamp::parse("2020-06-01T02:00:00+02:00").is_ok());
    /// assert!(Timestamp::parse("2020-06-01").is_ok());
    ///
    /// assert!(Timestamp::parse("2020-13-01").is_err());
    /// assert!(Timestamp::parse("").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        if s.is_empty() {
            return Err(TimeError::new("empty string"));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }

        let naive = s.strip_suffix('Z').unwrap_or(s);

        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Self(dt.and_utc()));
        }

        if let Ok(date) = NaiveDate::parse_from_str(naive, "%Y-%m-%d") {
            return Ok(Self(date.and_time(NaiveTime::MIN).and_utc()));
        }

        Err(TimeError::new("expected YYYY-MM-DDTHH:MM:SS[.f][Z]"))
    }

    /// Returns the calendar date (UTC).
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.fZ"))
    }
}
