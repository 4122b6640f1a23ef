//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define shell metrics (requests, latency, renders, lazy loads)
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `shell_requests_total` (counter): total requests by method, status
//! - `shell_request_duration_seconds` (histogram): latency distribution
//! - `shell_renders_total` (counter): pages produced, by render mode
//! - `shell_lazy_loads_total` (counter): lazy route materialisations, by route
//!
//! # Design Decisions
//! - Macros are no-ops until `init_metrics` installs the exporter
//! - Labels kept low-cardinality (no raw paths for API calls)

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::routing::RenderMode;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    let status = status.to_string();
    counter!(
        "shell_requests_total",
        "method" => method.to_string(),
        "status" => status.clone()
    )
    .increment(1);
    histogram!(
        "shell_request_duration_seconds",
        "method" => method.to_string(),
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}

pub fn record_render(mode: RenderMode) {
    counter!("shell_renders_total", "mode" => mode.as_str()).increment(1);
}

pub fn record_lazy_load(route: &str) {
    counter!("shell_lazy_loads_total", "route" => format!("/{route}")).increment(1);
}
