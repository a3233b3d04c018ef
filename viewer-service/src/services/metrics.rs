//! Metrics collection and Prometheus export.
//!
//! Initializes the metrics exporter and provides the /metrics endpoint handler.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Duration;

/// Global handle to the Prometheus recorder. `None` if installation failed.
static METRICS_HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();

/// Install the Prometheus recorder. Safe to call more than once; only the
/// first call installs. Returns whether a recorder is active.
pub fn init_metrics() -> bool {
    METRICS_HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install Prometheus recorder");
                None
            }
        })
        .is_some()
}

/// Get the current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .and_then(|handle| handle.as_ref())
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}

pub fn record_frame_transformed(transformer: &'static str, elapsed: Duration) {
    counter!("frames_transformed_total", "transformer" => transformer).increment(1);
    histogram!("frame_transform_duration_seconds", "transformer" => transformer)
        .record(elapsed.as_secs_f64());
}

pub fn record_avatar_upload(size: usize) {
    counter!("avatar_uploads_total").increment(1);
    histogram!("avatar_upload_bytes").record(size as f64);
}
