use serde_json::json;
use crate::config::credentials::{ApiKey, API_KEY_SHELL_REF, REDACTED};
use crate::errors::GatewayError;
use crate::models::ScanRequest;
use crate::utils::json::{to_compact_ascii, to_pretty_sorted};

/// Wrap `value` in single quotes for sh/bash/zsh, closing and reopening the
/// quote around any embedded single quote.
pub fn sh_single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r#"'"'"'"#))
}

/// A copy-pasteable curl command for the request. The key is referenced via
/// the environment (double-quoted so the shell expands it), never inlined.
pub fn render_curl(url: &str, request: &ScanRequest) -> Result<String, GatewayError> {
    let payload = to_compact_ascii(request)?;
    Ok(format!(
        "curl -sS -X POST {} -H 'Content-Type: application/json' -H \"X-API-Key: {}\" --data {}",
        sh_single_quote(url),
        API_KEY_SHELL_REF,
        sh_single_quote(&payload),
    ))
}

/// Everything the live call would send, with the key replaced by its source.
pub fn render_dry_run(url: &str, api_key: Option<&ApiKey>, request: &ScanRequest) -> Result<String, GatewayError> {
    let preview = json!({
        "url": url,
        "headers": {
            "Content-Type": "application/json",
            "X-API-Key": REDACTED,
        },
        "auth_source": api_key.map(ApiKey::source).unwrap_or("<none>"),
        "payload": request,
    });
    Ok(to_pretty_sorted(&preview)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::credentials::resolve_api_key_with;
    use crate::models::ContentType;

    #[test]
    fn test_sh_single_quote() {
        assert_eq!(sh_single_quote("plain"), "'plain'");
        assert_eq!(sh_single_quote("it's"), r#"'it'"'"'s'"#);
    }

    #[test]
    fn test_render_curl_uses_env_reference() {
        let request = ScanRequest::builder("don't leak", ContentType::Text).build();
        let cmd = render_curl("https://gateway.trymighty.ai/v1/scan", &request).unwrap();

        assert!(cmd.starts_with("curl -sS -X POST 'https://gateway.trymighty.ai/v1/scan' "));
        assert!(cmd.contains(r#"-H "X-API-Key: ${MIGHTY_PRO_API_KEY:-$MIGHTY_API_KEY}""#));
        assert!(cmd.contains(r#"--data '{"content":"don'"'"'t leak","content_type":"text""#));
    }

    #[test]
    fn test_render_dry_run_redacts_key() {
        let key = resolve_api_key_with(None, |name| {
            (name == "MIGHTY_API_KEY").then(|| "sk-live-0123456789".to_string())
        });
        let request = ScanRequest::builder("hello", ContentType::Text).build();
        let out = render_dry_run("http://127.0.0.1:18081/v1/scan", key.as_ref(), &request).unwrap();

        assert!(!out.contains("sk-live-0123456789"));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["auth_source"], "MIGHTY_API_KEY");
        assert_eq!(parsed["headers"]["X-API-Key"], "<redacted>");
        assert_eq!(parsed["payload"]["content_type"], "text");
        assert_eq!(parsed["url"], "http://127.0.0.1:18081/v1/scan");
    }

    #[test]
    fn test_render_dry_run_without_key() {
        let request = ScanRequest::builder("hello", ContentType::Text).build();
        let out = render_dry_run("http://x/v1/scan", None, &request).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["auth_source"], "<none>");
        // Top-level keys come out sorted.
        let auth = out.find("\"auth_source\"").unwrap();
        let url = out.find("\"url\"").unwrap();
        assert!(auth < url);
    }
}
