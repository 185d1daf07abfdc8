use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;
use crate::utils::json::to_pretty_sorted;

pub const SERVER_NAME: &str = concat!("mock-citadel-gateway/", env!("CARGO_PKG_VERSION"));

/// JSON body rendered pretty-printed with sorted keys, the way the hosted
/// Gateway formats its replies.
pub struct PrettyJson<T>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        let PrettyJson(status, body) = self;
        match to_pretty_sorted(&body) {
            Ok(text) => (
                status,
                [
                    (header::CONTENT_TYPE, "application/json"),
                    (header::SERVER, SERVER_NAME),
                ],
                text,
            )
                .into_response(),
            Err(e) => {
                error!(error = %e, "Failed to serialize response body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
