//! Prints the live USD -> INR exchange rate from open.er-api.com.

use clap::Parser;
use relay::{
    RateFetcher, RateSummary, RelayResult, TARGET_CURRENCY, init_tracing, render_summary,
};
use std::process::ExitCode;
use tracing::{error, info};

/// Command-line arguments for the rate check.
#[derive(Parser, Debug)]
#[command(name = "check-api")]
#[command(about = "Print the latest exchange rate snapshot")]
#[command(version)]
struct Args {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = init_tracing("warn") {
        eprintln!("{}", e);
    }

    let _args = Args::parse();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "check-api failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> RelayResult<()> {
    let fetcher = RateFetcher::new();
    info!(endpoint = %fetcher.endpoint(), "Fetching exchange rates");

    let response = fetcher.fetch().await?;
    let summary = RateSummary::from_response(&response, TARGET_CURRENCY);

    let stdout = std::io::stdout();
    render_summary(&summary, &mut stdout.lock())
}
