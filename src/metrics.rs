//! Prometheus metrics for request latency and computation counts.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::arithmetic::Operation;
use crate::error::AppError;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// Completed calculations counter metric name.
pub const METRIC_CALCULATIONS: &str = "calculations_total";
/// Rejected calculation requests counter metric name.
pub const METRIC_VALIDATION_FAILURES: &str = "validation_failures_total";

/// Install the global Prometheus recorder and describe all metrics.
/// Call this once at startup.
pub fn init_metrics() -> Result<PrometheusHandle, AppError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    describe_metrics();
    Ok(handle)
}

/// A handle that renders metrics without touching the global recorder.
pub fn detached_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}

fn describe_metrics() {
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(METRIC_CALCULATIONS, "Total number of calculations performed");
    describe_counter!(
        METRIC_VALIDATION_FAILURES,
        "Total number of requests rejected for invalid operands"
    );

    debug!("Metrics initialized");
}

/// Record HTTP request latency.
pub fn record_http_latency(start: Instant, endpoint: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint.to_string()).record(latency_ms);
}

/// Increment the calculations counter.
pub fn inc_calculations(operation: Operation) {
    counter!(METRIC_CALCULATIONS, "operation" => operation.as_ref().to_string()).increment(1);
}

/// Increment the validation failures counter.
pub fn inc_validation_failures(operation: Operation) {
    counter!(METRIC_VALIDATION_FAILURES, "operation" => operation.as_ref().to_string())
        .increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_recorder_renders_counters() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            inc_calculations(Operation::Multiply);
            inc_calculations(Operation::Multiply);
            inc_validation_failures(Operation::Sum);
        });

        let rendered = handle.render();
        assert!(rendered.contains("calculations_total{operation=\"multiply\"} 2"));
        assert!(rendered.contains("validation_failures_total{operation=\"sum\"} 1"));
    }

    #[test]
    fn recording_without_recorder_is_noop() {
        record_http_latency(Instant::now(), "/api/sum");
        inc_calculations(Operation::Sum);
    }
}
