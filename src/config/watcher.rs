//! Configuration file watcher for hot reload.
//!
//! Only the catalog section is swapped at runtime. Listener, timeout and
//! observability changes need a restart and are reported as such.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::loader::load_config;
use crate::config::schema::MockConfig;

/// Shared, atomically replaceable config.
pub type SharedConfig = Arc<ArcSwap<MockConfig>>;

/// Watches a config file and swaps reloaded configs into a [`SharedConfig`].
pub struct ConfigWatcher {
    path: PathBuf,
    current: SharedConfig,
}

impl ConfigWatcher {
    pub fn new(path: &Path, current: SharedConfig) -> Self {
        Self {
            path: path.to_path_buf(),
            current,
        }
    }

    /// Start watching. The returned handle must be kept alive.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let path = self.path.clone();
        let current = self.current.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    match load_config(&path) {
                        Ok(new_config) => {
                            apply_reload(&current, new_config);
                        }
                        Err(e) => tracing::error!(
                            path = ?path,
                            error = %e,
                            "Config reload rejected, keeping current configuration"
                        ),
                    }
                }
                Ok(_) => {}
                Err(e) => tracing::error!(error = ?e, "Config watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}

/// Swap `new_config` in. Returns whether anything changed.
pub fn apply_reload(current: &ArcSwap<MockConfig>, new_config: MockConfig) -> bool {
    let old = current.load();
    if **old == new_config {
        tracing::debug!("Config file touched but unchanged");
        return false;
    }

    if old.listener != new_config.listener
        || old.timeouts != new_config.timeouts
        || old.observability != new_config.observability
    {
        tracing::warn!("Listener, timeout and observability changes take effect after restart");
    }
    if old.catalog.mount != new_config.catalog.mount {
        tracing::info!(
            old_mount = ?old.catalog.mount,
            new_mount = ?new_config.catalog.mount,
            "Catalog mount changed"
        );
    }

    current.store(Arc::new(new_config));
    true
}
