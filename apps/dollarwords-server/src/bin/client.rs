//! # dollarwords-client
//!
//! Sends one amount to a running server and prints the reply.
//!
//! The amount is checked against the entry pattern first, so a refused
//! entry never opens a connection.

use anyhow::{bail, Context};
use clap::Parser;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

use dollarwords_server::{input::ENTRY_PATTERN, logging, EntryPattern};

#[derive(Debug, Parser)]
#[command(name = "dollarwords-client", version, about = "Asks a dollarwords server to spell an amount")]
struct Args {
    /// Amount such as 1234,56 or 7.5
    amount: String,

    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    addr: String,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let pattern = EntryPattern::new().context("Failed to compile entry pattern")?;
    let amount = args.amount.trim();
    if !pattern.accepts(amount) {
        bail!("'{}' does not match the entry pattern {}", amount, ENTRY_PATTERN);
    }

    let mut stream = TcpStream::connect(&args.addr)
        .await
        .with_context(|| format!("Failed to connect to {}", args.addr))?;
    debug!(addr = %args.addr, amount, "Connected, sending amount");

    stream.write_all(amount.as_bytes()).await?;
    stream.shutdown().await?;

    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .context("Failed to read server response")?;

    if response.is_empty() {
        bail!("Server closed the connection without a response");
    }

    println!("{response}");
    Ok(())
}
