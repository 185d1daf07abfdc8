use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    Usage(String),

    #[error("Missing API key. Provide --api-key or set MIGHTY_PRO_API_KEY/MIGHTY_API_KEY.")]
    MissingApiKey,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Network(String),

    #[error("Non-JSON response (status={}): {}", display_status(.status), .preview)]
    NonJsonResponse { status: Option<u16>, preview: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn display_status(status: &Option<u16>) -> String {
    status.map(|s| s.to_string()).unwrap_or_else(|| "unknown".to_string())
}
