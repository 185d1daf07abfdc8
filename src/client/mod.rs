pub mod gateway;
pub mod preview;

pub use gateway::{parse_response, scan_url, GatewayClient, RawResponse};
pub use preview::{render_curl, render_dry_run, sh_single_quote};
