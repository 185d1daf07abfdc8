//! Client and local mock for the Mighty Citadel content-safety Gateway.
//!
//! `scan-gateway` builds a scan request from the command line and either
//! previews it or sends it; `mock-gateway` answers the same wire contract
//! offline.

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod utils;
