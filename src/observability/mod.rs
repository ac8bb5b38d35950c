//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! locator, http, config produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (lookup counters, latency and candidate histograms)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt layer)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (method, segments, leaf path)
//! - Metrics are recorded per lookup, no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
