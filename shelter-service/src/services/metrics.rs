//! Prometheus metrics for shelter-service.
//!
//! HTTP request metrics flow through the `metrics` facade (recorded by
//! `service_core`'s middleware) into a Prometheus recorder; store metrics use
//! the `prometheus` default registry. `/metrics` renders both.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, HistogramVec, TextEncoder,
};
use std::sync::{Once, OnceLock};

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
static INIT: Once = Once::new();

/// Database query duration histogram.
pub static DB_QUERY_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "shelter_db_query_duration_seconds",
        "Database query duration in seconds",
        &["operation"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .expect("Failed to register db_query_duration")
});

/// Writes against the Animal and Adopter tables.
pub static WRITES_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "shelter_writes_total",
        "Total number of write operations",
        &["operation", "status"]
    )
    .expect("Failed to register writes_total")
});

/// Error counter for alerting.
pub static ERRORS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "shelter_errors_total",
        "Total number of errors by type",
        &["error_type"]
    )
    .expect("Failed to register errors_total")
});

/// Install the Prometheus recorder and force the lazy collectors. Safe to call
/// more than once.
pub fn init_metrics() {
    INIT.call_once(|| {
        match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                let _ = METRICS_HANDLE.set(handle);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Prometheus recorder not installed");
            }
        }

        Lazy::force(&DB_QUERY_DURATION);
        Lazy::force(&WRITES_TOTAL);
        Lazy::force(&ERRORS_TOTAL);
    });
}

/// Record the outcome of a write.
pub fn record_write(operation: &str, status: &str) {
    WRITES_TOTAL.with_label_values(&[operation, status]).inc();
}

/// Count an error by its taxonomy label.
pub fn record_error(error_type: &str) {
    ERRORS_TOTAL.with_label_values(&[error_type]).inc();
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let mut output = METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_default();

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    output.push_str(&encoder.encode_to_string(&metric_families).unwrap_or_default());

    output
}
