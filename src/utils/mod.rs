pub mod json;
pub mod truncation;
