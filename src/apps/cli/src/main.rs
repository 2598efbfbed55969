//! Karya CLI entry point.

mod app;
mod check;
mod logging;
mod ui;

use anyhow::Result;
use clap::{Parser, Subcommand};

use karya_core::BackendConfig;

#[derive(Parser)]
#[command(
    name = "karya-cli",
    version,
    about = "Terminal client for the Karya community platform"
)]
struct Cli {
    /// Backend base URL (overrides KARYA_BACKEND_URL).
    #[arg(long, global = true)]
    backend: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Verify the backend connection and report latency.
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = cli.command.is_none();
    logging::init(interactive);

    // Built exactly once; everything below receives it by reference.
    let config = BackendConfig::resolve(cli.backend.as_deref())?;

    match cli.command {
        Some(Command::Check) => check::run(config).await,
        None => app::run(config).await,
    }
}
