//! FDSN station availability lookup.
//!
//! Asks an FDSN availability web service for the extent of recorded data
//! for a network and station selector, and reduces the per-channel answer
//! to one earliest start and one latest end.

pub mod app;
pub mod availability;
pub mod cli;
pub mod domain;
pub mod summary;
