//! Mock data server.
//!
//! Serves files from a catalog directory whose names encode the requests
//! they answer.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request     ┌─────────┐    ┌──────────────┐    ┌──────────────┐
//!     ──────────────────▶│  http   │───▶│   locator    │───▶│    store     │
//!                        │ server  │    │ traverse +   │    │ (mount dir)  │
//!                        └────┬────┘    │ score + rank │    └──────────────┘
//!                             │         └──────────────┘
//!     Client Response         ▼
//!     ◀──────────────── leaf content / 404
//!
//!     Cross-cutting: config (+ watcher), observability, lifecycle
//! ```

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "mock-locator")]
#[command(about = "Serve mock responses from a catalog directory", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    mock_locator::lifecycle::startup::run(cli.config.as_deref()).await
}
