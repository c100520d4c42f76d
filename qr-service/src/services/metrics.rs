use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

use crate::models::EncodingMode;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Installs the Prometheus recorder. Later calls are no-ops.
pub fn init_metrics() {
    METRICS_HANDLE.get_or_init(|| {
        PrometheusBuilder::new()
            .install_recorder()
            .expect("failed to install Prometheus recorder")
    });
}

pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Count a successfully rendered code.
pub fn record_render(mode: EncodingMode, ecc: &str) {
    counter!(
        "qr_codes_rendered_total",
        "mode" => mode.as_str(),
        "ecc" => ecc.to_string()
    )
    .increment(1);
}

/// Count a rejected or failed request by failure kind.
pub fn record_failure(kind: &'static str) {
    counter!("qr_code_failures_total", "kind" => kind).increment(1);
}
