//! Decoding of `format=request` response bodies.
//!
//! Each line is one channel epoch:
//!
//! ```text
//! IM TX01 -- BHZ 2020-01-01T00:00:00.000000Z 2020-06-01T00:00:00.000000Z
//! ```
//!
//! The service writes `--` for an empty location code.

use crate::domain::Timestamp;

use super::error::{ParseError, ParseErrorKind};

/// Location placeholder used by FDSN request-format lines.
const EMPTY_LOCATION: &str = "--";

/// One channel epoch reported by the availability service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRow {
    pub network: String,
    pub station: String,
    /// Empty when the service reports `--`
    pub location: String,
    pub channel: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}

impl AvailabilityRow {
    /// Decode a single non-blank line.
    fn parse_line(line: &str) -> Result<Self, ParseErrorKind> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [network, station, location, channel, start, end] = fields[..] else {
            return Err(ParseErrorKind::FieldCount {
                found: fields.len(),
            });
        };

        let start_time = parse_timestamp(start, "start time")?;
        let end_time = parse_timestamp(end, "end time")?;
        if start_time > end_time {
            return Err(ParseErrorKind::Reversed);
        }

        let location = if location == EMPTY_LOCATION {
            String::new()
        } else {
            location.to_string()
        };

        Ok(Self {
            network: network.to_string(),
            station: station.to_string(),
            location,
            channel: channel.to_string(),
            start_time,
            end_time,
        })
    }
}

fn parse_timestamp(value: &str, field: &'static str) -> Result<Timestamp, ParseErrorKind> {
    Timestamp::parse(value).map_err(|_| ParseErrorKind::Timestamp {
        field,
        value: value.to_string(),
    })
}

/// Parse a response body into rows, in the order received.
///
/// Blank lines and `#` comment lines are skipped, so an empty body yields
/// an empty vector. Any other line must have exactly six fields with
/// valid timestamps.
pub fn parse_rows(text: &str) -> Result<Vec<AvailabilityRow>, ParseError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(idx, line)| {
            AvailabilityRow::parse_line(line).map_err(|kind| ParseError {
                line: idx + 1,
                kind,
            })
        })
        .collect()
}
