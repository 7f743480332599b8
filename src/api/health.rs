//! Health check endpoints for liveness and readiness probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;
use crate::domain::DomainError;

use super::state::AppState;

/// Health response with optional component checks
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
}

/// Returns 200 while the process is up
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check: both repositories must answer a count query
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();

    let checks = vec![
        component_check("documents", state.study_service.document_count().await),
        component_check(
            "test_questions",
            state.study_service.test_question_count().await,
        ),
    ];

    let overall_status = if checks.iter().all(|c| c.status == HealthStatus::Healthy) {
        HealthStatus::Healthy
    } else {
        HealthStatus::Unhealthy
    };

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(checks),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    let status_code = match overall_status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

fn component_check(name: &str, result: Result<usize, DomainError>) -> HealthCheck {
    match result {
        Ok(count) => HealthCheck {
            name: name.to_string(),
            status: HealthStatus::Healthy,
            message: None,
            records: Some(count),
        },
        Err(e) => HealthCheck {
            name: name.to_string(),
            status: HealthStatus::Unhealthy,
            message: Some(e.to_string()),
            records: None,
        },
    }
}
