use super::types::GatewayError;

/// Process exit code for a command that sent a request and got a non-2xx
/// status, an unparsable body, or no response at all.
pub const EXIT_REQUEST_FAILED: i32 = 1;

/// Process exit code for bad arguments, missing files or missing credentials.
pub const EXIT_USAGE: i32 = 2;

impl GatewayError {
    /// Whether this error was raised before any network activity because the
    /// invocation itself was invalid.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            GatewayError::Usage(_)
                | GatewayError::MissingApiKey
                | GatewayError::FileNotFound(_)
                | GatewayError::Config(_)
        )
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_usage() {
            EXIT_USAGE
        } else {
            EXIT_REQUEST_FAILED
        }
    }
}
