use std::path::{Path, PathBuf};
use std::time::Duration;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, info};
use crate::cli::commands::ScanArgs;
use crate::client::{self, GatewayClient};
use crate::config::credentials::redact_key;
use crate::config::{self, GatewayConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::errors::{GatewayError, EXIT_REQUEST_FAILED};
use crate::models::{ContentType, ScanPhase, ScanRequest};
use crate::utils::json::to_pretty_sorted;

/// What a successful run printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A dry-run payload or curl command; nothing was sent.
    Previewed,
    /// The Gateway answered with a JSON body and this status.
    Responded { status: u16 },
}

impl ScanOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            ScanOutcome::Previewed => 0,
            ScanOutcome::Responded { status } if (200..300).contains(status) => 0,
            ScanOutcome::Responded { .. } => EXIT_REQUEST_FAILED,
        }
    }
}

/// A fully validated invocation, ready to preview or send.
#[derive(Debug, Clone)]
pub struct ScanPlan {
    pub url: String,
    pub base_url: String,
    pub timeout: Duration,
    pub request: ScanRequest,
}

pub async fn handle_scan(args: ScanArgs) -> Result<ScanOutcome, GatewayError> {
    let file_config = match &args.config {
        Some(path) => config::parse_config(Path::new(path)).await?,
        None => GatewayConfig::default(),
    };

    let api_key = config::resolve_api_key(args.api_key.as_deref());
    let plan = build_plan(&args, &file_config).await?;

    if args.print_curl {
        println!("{}", client::render_curl(&plan.url, &plan.request)?);
        return Ok(ScanOutcome::Previewed);
    }

    if args.dry_run {
        println!("{}", client::render_dry_run(&plan.url, api_key.as_ref(), &plan.request)?);
        return Ok(ScanOutcome::Previewed);
    }

    let api_key = api_key.ok_or(GatewayError::MissingApiKey)?;
    let gateway = GatewayClient::new(&plan.base_url, plan.timeout)?;

    let (status, body) = match gateway.submit_scan(&api_key, &plan.request).await {
        Ok(raw) => (Some(raw.status), raw.body),
        Err(e) => {
            eprintln!("{}", redact_key(&e.to_string(), Some(&api_key)));
            (None, String::new())
        }
    };

    let value = client::parse_response(status, &body)?;
    println!("{}", to_pretty_sorted(&value)?);

    // parse_response only succeeds on a body, and a body implies a status.
    let status = status.unwrap_or_default();
    info!(status, "Scan finished");
    Ok(ScanOutcome::Responded { status })
}

enum ContentSource<'a> {
    Text(&'a str),
    File(&'a str),
}

/// Validate arguments and assemble the request. Checks run in a fixed order:
/// content source, scan group, file existence, content type.
pub async fn build_plan(args: &ScanArgs, file_config: &GatewayConfig) -> Result<ScanPlan, GatewayError> {
    let text = args.text.as_deref().filter(|t| !t.is_empty());
    let file = args.file.as_deref().filter(|f| !f.is_empty());

    let source = match (text, file) {
        (Some(text), None) => ContentSource::Text(text),
        (None, Some(file)) => ContentSource::File(file),
        _ => return Err(GatewayError::Usage("Provide exactly one of --text or --file.".into())),
    };

    let scan_phase = args.scan_phase
        .or(file_config.scan_phase)
        .unwrap_or_default();
    let has_group = args.scan_group_id.as_deref().is_some_and(|g| !g.is_empty());
    if scan_phase == ScanPhase::Output && !has_group {
        return Err(GatewayError::Usage("scan_group_id is required when scan_phase=output.".into()));
    }

    let (content, content_type) = match source {
        ContentSource::Text(text) => {
            let content_type = args.content_type.explicit().unwrap_or(ContentType::Text);
            (text.to_string(), content_type)
        }
        ContentSource::File(file) => read_file_content(file, args).await?,
    };

    let request = ScanRequest::builder(content, content_type)
        .scan_phase(scan_phase)
        .profile(args.profile.or(file_config.profile).unwrap_or_default())
        .analysis_mode(args.analysis_mode.or(file_config.analysis_mode).unwrap_or_default())
        .async_scan(args.async_scan)
        .session_id(args.session_id.as_deref())
        .scan_group_id(args.scan_group_id.as_deref())
        .request_id(args.request_id.as_deref())
        .context(args.context.as_deref())
        .original_prompt(args.original_prompt.as_deref())
        .build();

    if let Some(url) = args.base_url.as_deref().filter(|u| !config::is_http_url(u)) {
        return Err(GatewayError::Usage(format!("--base-url must be an http(s) URL: {}", url)));
    }
    let base_url = args.base_url.clone()
        .or_else(|| file_config.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let timeout_secs = args.timeout
        .or(file_config.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
        return Err(GatewayError::Usage("--timeout must be at least 1 second.".into()));
    }

    debug!(
        content_type = %request.content_type,
        scan_phase = ?request.scan_phase,
        timeout_secs,
        "Built scan request"
    );

    Ok(ScanPlan {
        url: client::scan_url(&base_url),
        base_url,
        timeout: Duration::from_secs(timeout_secs),
        request,
    })
}

async fn read_file_content(file: &str, args: &ScanArgs) -> Result<(String, ContentType), GatewayError> {
    let path = PathBuf::from(file);
    if !path.exists() {
        return Err(GatewayError::FileNotFound(path.display().to_string()));
    }

    let content_type = match args.content_type.explicit() {
        Some(ContentType::Text) => {
            return Err(GatewayError::Usage("--content-type=text is invalid with --file.".into()));
        }
        Some(explicit) => explicit,
        None => ContentType::from_path(&path),
    };

    let bytes = tokio::fs::read(&path).await?;
    debug!(path = %path.display(), bytes = bytes.len(), "Encoding file content");
    Ok((STANDARD.encode(bytes), content_type))
}
