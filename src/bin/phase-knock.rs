use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use phase_knock::{knock, PayloadPolicy, SessionConfig, Vocabulary};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "phase-knock", about = "Answer a phase-challenge server and print the flag")]
struct Args {
    /// Target address (host:port)
    #[arg(long)]
    addr: String,

    /// Marker vocabulary the server speaks
    #[arg(long, default_value = "matrix-shift", value_parser = ["stages", "matrix-shift"])]
    vocabulary: String,

    /// Connect timeout in milliseconds
    #[arg(long, default_value_t = 2000)]
    connect_timeout_ms: u64,

    /// Per-read deadline in milliseconds (unbounded if omitted)
    #[arg(long)]
    read_timeout_ms: Option<u64>,

    /// Read chunk size; a shorter read ends a server message
    #[arg(long, default_value_t = phase_knock::frame::DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Abort when a prompt has no quoted operand instead of using ""
    #[arg(long)]
    strict_payload: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let vocabulary = Vocabulary::by_name(&args.vocabulary)
        .with_context(|| format!("unknown vocabulary {}", args.vocabulary))?;

    let mut builder = SessionConfig::builder()
        .connect_timeout(Duration::from_millis(args.connect_timeout_ms))
        .chunk_size(args.chunk_size);
    if let Some(ms) = args.read_timeout_ms {
        builder = builder.read_timeout(Duration::from_millis(ms));
    }
    if args.strict_payload {
        builder = builder.payload_policy(PayloadPolicy::Strict);
    }
    let config = builder.build()?;

    let flag = knock(&args.addr, vocabulary, config)
        .await
        .with_context(|| format!("session with {} failed", args.addr))?;
    println!("Flag: {flag}");

    Ok(())
}
