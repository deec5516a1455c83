//! # dollarwords-server
//!
//! Listens for amounts and answers each client with the amount in words.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  client ──"1234,56"──► :8080 ──► DollarFormatter                        │
//! │  client ◄── "one thousand two hundred thirty four dollars and ..."      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use dollarwords_core::DollarFormatter;
use dollarwords_server::{logging, ConversionServer, ServerConfig};

#[derive(Debug, Parser)]
#[command(name = "dollarwords-server", version, about = "Spells dollar amounts over TCP")]
struct Args {
    /// Path to server.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    info!("Starting dollarwords server...");

    let config = ServerConfig::load(args.config).context("Failed to load configuration")?;
    info!(
        addr = %config.listener.bind_address(),
        format = %config.protocol.response_format,
        separator = %config.protocol.decimal_separator,
        "Configuration loaded"
    );

    let server = ConversionServer::bind(config, DollarFormatter::new()).await?;
    server.run_until(shutdown_signal()).await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
