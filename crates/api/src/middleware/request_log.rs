//! Per-request access log.
//!
//! Emits one event per request with method, path, status, duration and
//! client address. Server errors are logged at `error`, everything else at
//! `info`.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Client address as recorded by `into_make_service_with_connect_info`.
///
/// Absent when the router is driven directly (tests).
fn client_addr(request: &Request) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Middleware function; mount with `axum::middleware::from_fn(log_request)`.
pub async fn log_request(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let client = client_addr(&request);

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        tracing::error!(%method, %path, status, duration_ms, %client, "Request failed");
    } else {
        tracing::info!(%method, %path, status, duration_ms, %client, "Request completed");
    }

    response
}
