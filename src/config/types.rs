use serde::{Deserialize, Serialize};
use crate::models::{AnalysisMode, Profile, ScanPhase};

pub const DEFAULT_BASE_URL: &str = "https://gateway.trymighty.ai";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Defaults loaded from a `--config` YAML file. Every field is optional;
/// command-line flags take precedence over anything set here.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub base_url: Option<String>,
    pub scan_phase: Option<ScanPhase>,
    pub profile: Option<Profile>,
    pub analysis_mode: Option<AnalysisMode>,
    pub timeout_secs: Option<u64>,
}
