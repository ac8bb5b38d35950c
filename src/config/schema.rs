//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the mock server.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct MockConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Catalog location and serving options.
    pub catalog: CatalogConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Root directory of the mock catalog.
    pub mount: PathBuf,

    /// Content type used when the leaf extension is unknown.
    pub default_content_type: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            mount: PathBuf::from("./mock"),
            default_content_type: "application/octet-stream".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: MockConfig = toml::from_str("").unwrap();
        assert_eq!(config, MockConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config: MockConfig = toml::from_str(
            r#"
            [catalog]
            mount = "/srv/mock"

            [observability]
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.mount, PathBuf::from("/srv/mock"));
        assert_eq!(config.catalog.default_content_type, "application/octet-stream");
        assert_eq!(config.observability.log_level, "debug");
        assert!(!config.observability.metrics_enabled);
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
    }
}
