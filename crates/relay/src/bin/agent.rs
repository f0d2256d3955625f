//! Interactive assistant.
//!
//! Forwards each console line to the Anthropic Messages API as a single-turn
//! request and prints the reply. Type `goodbye` to quit.

use clap::Parser;
use relay::{ChatConfig, ChatLoop, RelayResult, StdinLines, init_tracing, load_env_file};
use std::process::ExitCode;
use tracing::{error, info};

/// Command-line arguments for the assistant.
#[derive(Parser, Debug)]
#[command(name = "agent")]
#[command(about = "Interactive single-turn chat with a hosted model")]
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
            error!(error = %e, "agent failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> RelayResult<()> {
    let cwd = std::env::current_dir()?;
    let source = load_env_file(&cwd)?;
    println!("{}", source);

    let config = ChatConfig::from_env()?;
    info!(model = %config.model(), "Starting chat loop");

    let client = config.client()?;
    let mut chat = ChatLoop::new(config, client);

    let stdout = std::io::stdout();
    chat.run(&mut StdinLines::new(), &mut stdout.lock()).await
}
