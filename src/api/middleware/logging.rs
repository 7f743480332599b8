//! Request logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderMap, HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Logs each request and its outcome, tagging both lines with a request id.
///
/// The id comes from `x-request-id` when the client sent one and is echoed
/// back on the response. `TraceLayer` owns the span, so none is opened here.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = matched_path(&request);
    let request_id = request_id(request.headers());

    info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        headers = %loggable_headers(request.headers()),
        "Incoming request"
    );

    let mut response = next.run(request).await;
    let status = response.status();
    let duration_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            request_id = %request_id,
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            request_id = %request_id,
            "Request completed"
        );
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}

fn matched_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

/// Render the headers worth logging, with credentials masked
fn loggable_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .filter(|(name, _)| should_log_header(name.as_str()))
        .map(|(name, value)| {
            let value = if is_sensitive_header(name.as_str()) {
                "[REDACTED]"
            } else {
                value.to_str().unwrap_or("[invalid]")
            };
            format!("{}={}", name, value)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_sensitive_header(name: &str) -> bool {
    matches!(
        name,
        "authorization" | "proxy-authorization" | "cookie" | "x-api-key"
    )
}

fn should_log_header(name: &str) -> bool {
    matches!(
        name,
        "content-type"
            | "content-length"
            | "user-agent"
            | "x-forwarded-for"
            | "authorization"
            | "x-api-key"
    )
}
