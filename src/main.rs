use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use censo::cli::Cli;

const LOG_ENV: &str = "CENSO_LOG";

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so --json output on stdout stays parseable
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("censo=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
