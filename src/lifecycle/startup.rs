//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently
//! - A missing config file means defaults; no watcher is started then

use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tokio::net::TcpListener;

use crate::config::{load_config, ConfigWatcher, MockConfig, SharedConfig};
use crate::http::MockServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::{logging, metrics};

/// Load config, initialize observability, and serve until a shutdown signal.
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => MockConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);
    tracing::info!("mock-locator v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        mount = ?config.catalog.mount,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?);
    }

    let shared: SharedConfig = Arc::new(ArcSwap::from_pointee(config.clone()));

    let _watcher = match config_path {
        Some(path) => Some(ConfigWatcher::new(path, shared.clone()).run()?),
        None => None,
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Arc::new(Shutdown::new());
    tokio::spawn(signals::shutdown_on_signal(shutdown.clone()));

    MockServer::new(shared).run(listener, shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
