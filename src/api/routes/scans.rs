use axum::{body::Bytes, extract::rejection::BytesRejection, http::StatusCode};
use serde_json::Value;
use tracing::debug;
use crate::api::errors::ApiError;
use crate::api::models::SubmitScanResponse;
use crate::api::response::PrettyJson;

pub async fn submit_scan(
    body: Result<Bytes, BytesRejection>,
) -> Result<PrettyJson<SubmitScanResponse>, ApiError> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::InvalidJson
        }
    })?;
    let payload = parse_payload(&body)?;
    let scan_id = uuid::Uuid::new_v4().to_string();
    let received_at_ms = chrono::Utc::now().timestamp_millis();

    debug!(scan_id = %scan_id, bytes = body.len(), "Accepted scan");

    Ok(PrettyJson(
        StatusCode::OK,
        SubmitScanResponse::allow(scan_id, received_at_ms, payload),
    ))
}

/// Blank bodies mean "no payload" and echo back as `null`. Invalid UTF-8 is
/// replaced rather than rejected.
fn parse_payload(body: &[u8]) -> Result<Value, ApiError> {
    let raw = String::from_utf8_lossy(body);
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&raw).map_err(|_| ApiError::InvalidJson)
}
