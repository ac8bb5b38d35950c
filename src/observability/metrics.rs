//! Metrics collection and exposition.
//!
//! # Metrics
//! - `locator_lookups_total` (counter): lookups by outcome (`found`, `not_found`, `error`)
//! - `locator_lookup_duration_seconds` (histogram): catalog walk latency
//! - `locator_candidates` (histogram): candidates collected per lookup
//! - `mock_responses_total` (counter): served responses by method and status

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one catalog lookup.
pub fn record_lookup<T, E>(result: &Result<T, E>, candidates: usize, start: Instant) {
    let outcome = match result {
        Err(_) => "error",
        Ok(_) if candidates == 0 => "not_found",
        Ok(_) => "found",
    };
    counter!("locator_lookups_total", "outcome" => outcome).increment(1);
    histogram!("locator_lookup_duration_seconds").record(start.elapsed().as_secs_f64());
    histogram!("locator_candidates").record(candidates as f64);
}

/// Record a served mock response.
pub fn record_response(method: &str, status: u16) {
    counter!(
        "mock_responses_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}
