//! Domain types for availability queries.
//!
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod codes;
mod time;

pub use codes::{InvalidSelector, NetworkCode, StationPattern};
pub use time::{TimeError, Timestamp};
