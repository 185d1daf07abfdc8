pub mod scans;
pub mod status;

use super::errors::ApiError;

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
