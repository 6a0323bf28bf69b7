//! Command-line argument handling.
//!
//! Exactly two positional arguments are accepted: a network code and a
//! station selector. Anything else is a [`UsageError`].

use clap::Parser;
use clap::error::ErrorKind;

use crate::availability::{
    AvailabilityConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, ExtentQuery,
};
use crate::domain::{NetworkCode, StationPattern};

const BIN_NAME: &str = "fdsn-availability";

/// Text printed when the arguments are wrong.
pub const USAGE: &str = "\
Get the data availability of seismic stations from FDSN data centers.

Usage:
    fdsn-availability [OPTIONS] <NETWORK> <STATION>

    STATION can be a single station code, a comma-separated list of station
    codes, or a wildcard expression. Enclose a wildcard expression in quotes.

Options:
    --timeout <SECS>   Request timeout in seconds [default: 30]
    --base-url <URL>   Availability extent endpoint
    -h, --help         Print help
    -V, --version      Print version

Example:
    fdsn-availability IM 'TX*'
";

/// Print the time span of available data for seismic stations
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, override_help = USAGE)]
struct Args {
    /// Network code and station selector; the count is checked after parsing
    #[arg(num_args = 0.., hide = true)]
    selectors: Vec<String>,

    /// Request timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Availability extent endpoint
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

/// Errors in the command line. Always reported with [`USAGE`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    /// Not exactly two positional arguments
    #[error("expected 2 arguments (network, station), got {0}")]
    WrongArgumentCount(usize),

    /// An argument or option value is malformed
    #[error("{0}")]
    InvalidArgument(String),
}

/// A validated request to run.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub query: ExtentQuery,
    pub config: AvailabilityConfig,
}

/// Result of reading the command line.
#[derive(Debug, Clone)]
pub enum Command {
    /// Query the service
    Run(Invocation),
    /// Print this text (help or version) and exit successfully
    Print(String),
}

/// First line of a rendered clap error, without its `error: ` prefix.
///
/// Clap appends its own usage and hint lines; [`USAGE`] replaces them.
fn clap_message(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).trim_end().to_string()
}

/// Parse a full argument vector, program name first.
pub fn parse<I, T>(argv: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    Ok(Command::Print(e.to_string()))
                }
                _ => Err(UsageError::InvalidArgument(clap_message(&e))),
            };
        }
    };

    let [network, station] = args.selectors.as_slice() else {
        return Err(UsageError::WrongArgumentCount(args.selectors.len()));
    };

    let network =
        NetworkCode::parse(network).map_err(|e| UsageError::InvalidArgument(e.to_string()))?;
    let station =
        StationPattern::parse(station).map_err(|e| UsageError::InvalidArgument(e.to_string()))?;

    let config = AvailabilityConfig::new()
        .with_base_url(args.base_url)
        .with_timeout(args.timeout);

    Ok(Command::Run(Invocation {
        query: ExtentQuery::new(network, station),
        config,
    }))
}
