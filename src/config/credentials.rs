use tracing::debug;

pub const PRO_API_KEY_ENV: &str = "MIGHTY_PRO_API_KEY";
pub const DEFAULT_API_KEY_ENV: &str = "MIGHTY_API_KEY";
pub const API_KEY_FLAG: &str = "--api-key";
pub const REDACTED: &str = "<redacted>";

/// Shell expansion used in place of the key wherever a command is printed.
pub const API_KEY_SHELL_REF: &str = "${MIGHTY_PRO_API_KEY:-$MIGHTY_API_KEY}";

/// A resolved credential and where it came from. `Debug` never shows the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    value: String,
    source: &'static str,
}

impl ApiKey {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// `--api-key` or the name of the environment variable it was read from.
    pub fn source(&self) -> &'static str {
        self.source
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey")
            .field("value", &REDACTED)
            .field("source", &self.source)
            .finish()
    }
}

/// Resolve the API key: explicit flag, then `MIGHTY_PRO_API_KEY`, then
/// `MIGHTY_API_KEY`. Empty values are skipped.
pub fn resolve_api_key(cli_api_key: Option<&str>) -> Option<ApiKey> {
    resolve_api_key_with(cli_api_key, |name| std::env::var(name).ok())
}

pub fn resolve_api_key_with<F>(cli_api_key: Option<&str>, lookup: F) -> Option<ApiKey>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = cli_api_key.filter(|k| !k.is_empty()) {
        debug!(source = API_KEY_FLAG, "Resolved API key");
        return Some(ApiKey { value: key.to_string(), source: API_KEY_FLAG });
    }

    for var_name in [PRO_API_KEY_ENV, DEFAULT_API_KEY_ENV] {
        if let Some(value) = lookup(var_name).filter(|v| !v.is_empty()) {
            debug!(source = var_name, "Resolved API key from environment");
            return Some(ApiKey { value, source: var_name });
        }
    }

    debug!("No API key configured");
    None
}

/// Replace every occurrence of the key in `text` with `<redacted>`.
pub fn redact_key(text: &str, key: Option<&ApiKey>) -> String {
    match key {
        Some(k) if !k.value().is_empty() => text.replace(k.value(), REDACTED),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_flag_wins() {
        let key = resolve_api_key_with(
            Some("flag-key"),
            env(&[(PRO_API_KEY_ENV, "pro"), (DEFAULT_API_KEY_ENV, "default")]),
        )
        .unwrap();
        assert_eq!(key.value(), "flag-key");
        assert_eq!(key.source(), "--api-key");
    }

    #[test]
    fn test_pro_env_before_default_env() {
        let key = resolve_api_key_with(
            None,
            env(&[(PRO_API_KEY_ENV, "pro"), (DEFAULT_API_KEY_ENV, "default")]),
        )
        .unwrap();
        assert_eq!(key.value(), "pro");
        assert_eq!(key.source(), "MIGHTY_PRO_API_KEY");
    }

    #[test]
    fn test_default_env_fallback() {
        let key = resolve_api_key_with(Some(""), env(&[(PRO_API_KEY_ENV, ""), (DEFAULT_API_KEY_ENV, "d")]))
            .unwrap();
        assert_eq!(key.value(), "d");
        assert_eq!(key.source(), "MIGHTY_API_KEY");
    }

    #[test]
    fn test_nothing_configured() {
        assert!(resolve_api_key_with(None, env(&[])).is_none());
    }

    #[test]
    fn test_debug_hides_value() {
        let key = resolve_api_key_with(Some("sk-very-secret"), env(&[])).unwrap();
        let shown = format!("{:?}", key);
        assert!(!shown.contains("sk-very-secret"));
        assert!(shown.contains("<redacted>"));
    }

    #[test]
    fn test_redact_key() {
        let key = resolve_api_key_with(Some("sk-abc123"), env(&[])).unwrap();
        assert_eq!(redact_key("key=sk-abc123;", Some(&key)), "key=<redacted>;");
        assert_eq!(redact_key("nothing here", None), "nothing here");
    }
}
