use std::path::Path;
use crate::errors::GatewayError;
use super::types::GatewayConfig;
use tracing::debug;

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<GatewayConfig, GatewayError> {
    if !path.exists() {
        return Err(GatewayError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(GatewayError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config = parse_config_str(&content)?;
    debug!(path = %path.display(), "Loaded gateway defaults");
    Ok(config)
}

/// Parse and validate config file contents. An empty document yields the
/// default (all unset) config.
pub fn parse_config_str(content: &str) -> Result<GatewayConfig, GatewayError> {
    if content.trim().is_empty() {
        return Ok(GatewayConfig::default());
    }

    let config: GatewayConfig = serde_yaml::from_str(content)
        .map_err(|e| GatewayError::Config(format!("Invalid config file: {}", e)))?;

    validate(&config)?;
    Ok(config)
}

/// Whether a Gateway base URL uses a scheme the client can talk to.
pub fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn validate(config: &GatewayConfig) -> Result<(), GatewayError> {
    if config.timeout_secs == Some(0) {
        return Err(GatewayError::Config("timeout_secs must be at least 1".into()));
    }
    if let Some(url) = &config.base_url {
        if !is_http_url(url) {
            return Err(GatewayError::Config(format!("base_url must be an http(s) URL: {}", url)));
        }
    }
    Ok(())
}
