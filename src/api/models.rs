use serde::Serialize;
use serde_json::Value;

pub const ACTION_ALLOW: &str = "ALLOW";
pub const RISK_LEVEL_MINIMAL: &str = "MINIMAL";
pub const SCAN_STATUS_COMPLETE: &str = "complete";

/// Reply to `POST /v1/scan`.
#[derive(Debug, Serialize)]
pub struct SubmitScanResponse {
    pub action: &'static str,
    pub risk_level: &'static str,
    pub risk_score: u32,
    pub scan_id: String,
    pub scan_status: &'static str,
    pub preliminary: bool,
    pub processing_ms: u64,
    pub received_at_ms: i64,
    /// The request payload exactly as received, `null` when the body was empty.
    pub echo: Value,
}

impl SubmitScanResponse {
    /// A completed scan with a clean verdict.
    pub fn allow(scan_id: String, received_at_ms: i64, echo: Value) -> Self {
        Self {
            action: ACTION_ALLOW,
            risk_level: RISK_LEVEL_MINIMAL,
            risk_score: 0,
            scan_id,
            scan_status: SCAN_STATUS_COMPLETE,
            preliminary: false,
            processing_ms: 1,
            received_at_ms,
            echo,
        }
    }
}

/// Reply to `GET /v1/scan/{id}`.
#[derive(Debug, Serialize)]
pub struct ScanStatusResponse {
    pub scan_id: String,
    pub scan_status: &'static str,
    pub action: &'static str,
    pub risk_level: &'static str,
    pub risk_score: u32,
}

impl ScanStatusResponse {
    pub fn complete(scan_id: String) -> Self {
        Self {
            scan_id,
            scan_status: SCAN_STATUS_COMPLETE,
            action: ACTION_ALLOW,
            risk_level: RISK_LEVEL_MINIMAL,
            risk_score: 0,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}
