//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::MetricsConfig;

static NUMERIC_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+$").expect("valid path pattern"));

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
}

impl PrometheusMetrics {
    /// Get the metrics as a string for the /metrics endpoint
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Initialize Prometheus metrics
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            gauge!("qat_api_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
            tracing::info!("Prometheus metrics initialized at {}", config.path);

            Some(PrometheusMetrics {
                handle: Arc::new(handle),
            })
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Create the metrics router
pub fn create_metrics_router(metrics: PrometheusMetrics, path: &str) -> Router {
    Router::new()
        .route(path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record an HTTP request metric
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path)),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

/// Record one call to a model backend
pub fn record_inference_request(capability: &str, provider: &str, duration: Duration, success: bool) {
    let labels = [
        ("capability", capability.to_string()),
        ("provider", provider.to_string()),
        ("status", if success { "success" } else { "error" }.to_string()),
    ];

    counter!("inference_requests_total", &labels).increment(1);
    histogram!("inference_request_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Replace numeric path segments and cap length to bound label cardinality
fn sanitize_path(path: &str) -> String {
    let path = path
        .split('/')
        .map(|segment| {
            if NUMERIC_SEGMENT.is_match(segment) {
                "{id}"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/");

    path.chars().take(50).collect()
}
