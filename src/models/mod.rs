pub mod options;
pub mod scan_request;

pub use options::*;
pub use scan_request::*;
