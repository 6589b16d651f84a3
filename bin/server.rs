// Wealth Board - Web Server
// Serves the board page and JSON API with Axum

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use wealth_board::web::{router, AppState, SharedSource};
use wealth_board::{logging, BoardConfig, Dispatcher, RandomUserSource};

#[derive(Parser, Debug)]
#[command(name = "wealth-server", version, about = "Wealth Board over HTTP")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:3000")]
    addr: String,

    /// Random-user API endpoint (overrides WEALTH_BOARD_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,

    /// People fetched at startup (overrides WEALTH_BOARD_INITIAL_PEOPLE)
    #[arg(long)]
    initial: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init("info");
    let args = Args::parse();
    let config = BoardConfig::from_env().with_overrides(args.endpoint, args.initial);

    let source: SharedSource = Arc::new(RandomUserSource::new(&config)?);
    let dispatcher = Dispatcher::new(source);

    // Startup fetches are best effort; the page explains failures per command
    if let Err(err) = dispatcher.seed(config.initial_people).await {
        tracing::warn!(error = %err, "could not fetch initial people");
    }

    let app = router(AppState::new(dispatcher));

    let listener = tokio::net::TcpListener::bind(&args.addr)
        .await
        .with_context(|| format!("failed to bind to {}", args.addr))?;

    tracing::info!(addr = %args.addr, endpoint = %config.endpoint, "server running");
    println!("\n🚀 Server running on http://{}", args.addr);
    println!("   API: http://{}/api/people", args.addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .context("server stopped unexpectedly")?;

    Ok(())
}
