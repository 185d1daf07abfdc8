pub mod errors;
pub mod models;
pub mod response;
pub mod routes;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use crate::errors::GatewayError;

/// Largest request body accepted; file scans arrive base64-encoded.
pub const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

pub fn build_router() -> Router {
    build_router_with_body_limit(MAX_BODY_BYTES)
}

/// Oversized bodies are answered with a JSON 413 by the submit handler.
pub fn build_router_with_body_limit(max_body_bytes: usize) -> Router {
    Router::new()
        .route("/v1/scan", post(routes::scans::submit_scan))
        .route(
            "/v1/scan/",
            post(routes::scans::submit_scan).get(routes::status::get_scan_status),
        )
        .route("/v1/scan/{*id}", get(routes::status::get_scan_status))
        .fallback(routes::not_found)
        .method_not_allowed_fallback(routes::not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}

/// Serve the mock on an already bound listener until the process is killed.
/// Each connection runs on its own task.
pub async fn serve(listener: TcpListener) -> Result<(), GatewayError> {
    axum::serve(listener, build_router())
        .await
        .map_err(|e| GatewayError::Internal(format!("Server error: {}", e)))
}
