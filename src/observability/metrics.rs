//! Metrics collection and exposition.
//!
//! # Metrics
//! - `api_requests_total` (counter): requests by method, path, status
//! - `api_request_duration_seconds` (histogram): latency by method, path
//! - `api_predictions_total` (counter): successful predictions by model
//! - `api_predicted_tokens` (histogram): tokens returned per prediction

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter with its own HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a finished request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    metrics::counter!(
        "api_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "api_request_duration_seconds",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record a successful prediction.
pub fn record_prediction(model: &str, tokens: usize) {
    metrics::counter!("api_predictions_total", "model" => model.to_string()).increment(1);
    metrics::histogram!("api_predicted_tokens", "model" => model.to_string()).record(tokens as f64);
}
