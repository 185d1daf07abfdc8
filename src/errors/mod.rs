pub mod types;
pub mod classification;

pub use types::GatewayError;
pub use classification::{EXIT_REQUEST_FAILED, EXIT_USAGE};
