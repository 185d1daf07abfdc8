pub mod credentials;
pub mod parser;
pub mod types;

pub use credentials::{resolve_api_key, ApiKey};
pub use parser::{is_http_url, parse_config};
pub use types::*;
