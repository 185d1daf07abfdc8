use std::time::Duration;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};
use crate::config::ApiKey;
use crate::errors::GatewayError;
use crate::models::ScanRequest;
use crate::utils::truncation::truncate_preview;

pub const SCAN_PATH: &str = "/v1/scan";

/// Submit endpoint for a Gateway base URL, ignoring any trailing slashes.
pub fn scan_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SCAN_PATH)
}

/// Status line and body of a Gateway reply, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

pub struct GatewayClient {
    client: Client,
    url: String,
}

impl GatewayClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("citadel-gateway/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: scan_url(base_url),
        })
    }

    /// Send one scan request. Any HTTP status counts as a response; only
    /// transport failures (DNS, connect, timeout, broken body) are errors.
    pub async fn submit_scan(&self, api_key: &ApiKey, request: &ScanRequest) -> Result<RawResponse, GatewayError> {
        info!(
            url = %self.url,
            content_type = %request.content_type,
            auth_source = api_key.source(),
            "Submitting scan"
        );

        let resp = self.client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .header("X-API-Key", api_key.value())
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp.text().await
            .map_err(|e| GatewayError::Network(format!("Failed to read response body: {}", e)))?;

        debug!(status, bytes = body.len(), "Gateway responded");
        Ok(RawResponse { status, body })
    }
}

/// Parse a reply body as JSON regardless of status, since the Gateway sends
/// structured errors with 4xx/5xx. `status` is `None` when nothing came back.
pub fn parse_response(status: Option<u16>, body: &str) -> Result<Value, GatewayError> {
    serde_json::from_str(body).map_err(|_| GatewayError::NonJsonResponse {
        status,
        preview: truncate_preview(body),
    })
}
