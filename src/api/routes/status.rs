use axum::http::{StatusCode, Uri};
use tracing::debug;
use crate::api::models::ScanStatusResponse;
use crate::api::response::PrettyJson;

pub const STATUS_PREFIX: &str = "/v1/scan/";

/// Every scan id is reported as already complete. The id is the raw path
/// suffix, still percent-encoded and possibly empty.
pub async fn get_scan_status(uri: Uri) -> PrettyJson<ScanStatusResponse> {
    let id = raw_scan_id(uri.path()).to_string();
    debug!(scan_id = %id, "Status lookup");
    PrettyJson(StatusCode::OK, ScanStatusResponse::complete(id))
}

fn raw_scan_id(path: &str) -> &str {
    path.split_once(STATUS_PREFIX).map(|(_, id)| id).unwrap_or_default()
}
