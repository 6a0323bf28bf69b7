//! Availability Query: request construction, HTTP exchange and response
//! decoding for an FDSN availability extent service.
//!
//! Key characteristics of the `extent` endpoint with `format=request`:
//! - The body is header-less text, one line per channel epoch
//! - Six whitespace-separated columns: network, station, location,
//!   channel, earliest start, latest end
//! - Nothing is paginated; the whole answer arrives in one response

mod client;
mod error;
mod mock;
mod query;
mod rows;

pub use client::{
    AvailabilityClient, AvailabilityConfig, AvailabilitySource, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT_SECS,
};
pub use error::{AvailabilityError, ParseError, ParseErrorKind};
pub use mock::MockAvailabilitySource;
pub use query::ExtentQuery;
pub use rows::{AvailabilityRow, parse_rows};
