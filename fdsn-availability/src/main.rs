use std::io;
use std::process::ExitCode;

use fdsn_availability::app;
use fdsn_availability::availability::AvailabilityClient;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the summary
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let code = app::run(
        std::env::args_os(),
        AvailabilityClient::new,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await;

    ExitCode::from(code)
}
