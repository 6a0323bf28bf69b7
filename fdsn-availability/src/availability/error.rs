//! Availability query error types.

use crate::domain::{NetworkCode, StationPattern};

/// Why a single response line could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// Line did not split into the six positional fields
    #[error("expected 6 whitespace-separated fields, found {found}")]
    FieldCount { found: usize },

    /// A start or end column is not a date/time
    #[error("unparseable {field} {value:?}")]
    Timestamp { field: &'static str, value: String },

    /// Start time lies after end time
    #[error("start time is after end time")]
    Reversed,
}

/// A malformed line in the service response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number within the response body
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// Errors that can occur while querying and summarising availability.
#[derive(Debug, thiserror::Error)]
pub enum AvailabilityError {
    /// HTTP request failed (connection refused, DNS, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service did not answer within the configured timeout
    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Service returned a status other than 200
    #[error("{}", service_message(.status, .message))]
    Service { status: u16, message: String },

    /// Response body could not be decoded
    #[error("malformed response: {0}")]
    Parse(#[from] ParseError),

    /// Query matched no channels
    #[error("no availability data for network {network} station {station}")]
    NoData {
        network: NetworkCode,
        station: StationPattern,
    },
}

impl AvailabilityError {
    /// Returns the HTTP status for `Service` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            AvailabilityError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn service_message(status: &u16, message: &str) -> String {
    let mut out = format!("Error: {status}");
    if *status == 204 {
        out.push_str(" (no data matched the request)");
    }
    let message = message.trim();
    if !message.is_empty() {
        out.push_str(": ");
        out.push_str(message);
    }
    out
}
