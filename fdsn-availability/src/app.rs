//! Top-level flow: arguments in, summary or diagnostic out.
//!
//! Kept separate from `main` so the whole process behaviour, exit status
//! included, can be driven by tests against a mock source.

use std::io::Write;

use tracing::info;

use crate::availability::{
    AvailabilityConfig, AvailabilityError, AvailabilitySource, ExtentQuery, parse_rows,
};
use crate::cli::{self, Command, USAGE};
use crate::summary::{CoverageSummary, summarize};

/// Exit status on success.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status for every failure: usage, network, service, parse, no data.
pub const EXIT_FAILURE: u8 = 1;

/// Fetch, parse and reduce availability for one query.
pub async fn query_coverage<S: AvailabilitySource>(
    source: &S,
    query: &ExtentQuery,
) -> Result<CoverageSummary, AvailabilityError> {
    let body = source.fetch_availability(query).await?;
    let rows = parse_rows(&body)?;
    info!(rows = rows.len(), "parsed availability rows");
    summarize(&rows, query)
}

/// Run the program and return its exit status.
///
/// `connect` builds the source from the parsed configuration; it is not
/// called at all when the arguments are wrong. The summary and usage text
/// go to `out`, diagnostics to `err`.
pub async fn run<I, T, S, F, O, E>(argv: I, connect: F, out: &mut O, err: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    S: AvailabilitySource,
    F: FnOnce(AvailabilityConfig) -> Result<S, AvailabilityError>,
    O: Write,
    E: Write,
{
    let invocation = match cli::parse(argv) {
        Ok(Command::Run(invocation)) => invocation,
        Ok(Command::Print(text)) => {
            return match write!(out, "{text}") {
                Ok(()) => EXIT_SUCCESS,
                Err(_) => EXIT_FAILURE,
            };
        }
        Err(usage) => {
            let _ = writeln!(err, "error: {usage}");
            let _ = write!(out, "{USAGE}");
            return EXIT_FAILURE;
        }
    };

    let result = match connect(invocation.config) {
        Ok(source) => query_coverage(&source, &invocation.query).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(summary) => match write!(out, "{summary}") {
            Ok(()) => EXIT_SUCCESS,
            Err(_) => EXIT_FAILURE,
        },
        Err(e) => {
            let _ = writeln!(err, "{e}");
            EXIT_FAILURE
        }
    }
}
