//! Quotes HTTP server binary.
//!
//! Loads configuration (flags, environment, `.env`), opens the JSON-backed quote
//! store, serves the API until Ctrl+C, then flushes and closes the store.
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use quote_common::clock::SystemClock;
use quote_common::net::addr;
use quote_common::{QuoteStore, Result};
use quote_server::config::Args;
use quote_server::{AppState, app, shutdown};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logger();
    let args = Args::parse();

    info!("Opening quote store at {}", args.data.display());
    let store = QuoteStore::open(&args.data, SystemClock, args.malformed)?;
    info!("{} quote(s) loaded, malformed timestamps: {}", store.len(), store.policy());
    let state = Arc::new(AppState::new(store));

    let listener = TcpListener::bind(addr(&args.host, args.port)).await?;
    info!("Quote server listening on http://{}", listener.local_addr()?);

    let served = axum::serve(listener, app(Arc::clone(&state)))
        .with_graceful_shutdown(shutdown_signal())
        .await;
    if let Err(e) = &served {
        error!("Server error: {}", e);
    }

    shutdown(state)?;
    served?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to install Ctrl+C handler: {}", e);
        return;
    }
    info!("Ctrl+C received. Shutting down server...");
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
