use clap::{Args, Parser};
use crate::models::{AnalysisMode, ContentTypeArg, Profile, ScanPhase};

#[derive(Parser)]
#[command(
    name = "scan-gateway",
    version,
    about = "Scan text or a file (image/pdf/document) with the Mighty Citadel Gateway",
    after_help = "Auth: pass --api-key, or set MIGHTY_PRO_API_KEY / MIGHTY_API_KEY."
)]
pub struct ScanCli {
    #[command(flatten)]
    pub args: ScanArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
#[command(name = "mock-gateway", version, about = "Local stub of the Mighty Citadel Gateway for offline testing")]
pub struct MockCli {
    #[command(flatten)]
    pub args: ServeArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Clone, Debug)]
pub struct OutputArgs {
    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored log output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Args, Clone, Debug, Default)]
pub struct ScanArgs {
    /// Mighty API key (if omitted: MIGHTY_PRO_API_KEY, then MIGHTY_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Gateway base URL [default: https://gateway.trymighty.ai]
    #[arg(long)]
    pub base_url: Option<String>,

    /// Text content to scan
    #[arg(long)]
    pub text: Option<String>,

    /// Path to file to scan (image/pdf/document)
    #[arg(long)]
    pub file: Option<String>,

    /// Content type; auto picks text for --text and guesses from the file extension otherwise
    #[arg(long, value_enum, default_value_t = ContentTypeArg::Auto)]
    pub content_type: ContentTypeArg,

    /// Scan phase [default: input]
    #[arg(long, value_enum)]
    pub scan_phase: Option<ScanPhase>,

    /// Policy profile [default: balanced]
    #[arg(long, value_enum)]
    pub profile: Option<Profile>,

    /// Analysis mode [default: secure]
    #[arg(long, value_enum)]
    pub analysis_mode: Option<AnalysisMode>,

    #[arg(long)]
    pub session_id: Option<String>,

    /// Required when --scan-phase=output
    #[arg(long)]
    pub scan_group_id: Option<String>,

    #[arg(long)]
    pub request_id: Option<String>,

    /// user_prompt|assistant_response|image_ocr|pdf_text|document_text|vision
    #[arg(long)]
    pub context: Option<String>,

    /// For output scan drift checks
    #[arg(long)]
    pub original_prompt: Option<String>,

    /// Async deep scan (esp. image/pdf)
    #[arg(long = "async")]
    pub async_scan: bool,

    /// Request timeout in seconds [default: 60]
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Print the request payload and exit
    #[arg(long)]
    pub dry_run: bool,

    /// Print a curl command and exit
    #[arg(long)]
    pub print_curl: bool,

    /// YAML file with defaults for base_url, scan_phase, profile, analysis_mode and timeout_secs
    #[arg(long)]
    pub config: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct ServeArgs {
    /// Listen address
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Listen port
    #[arg(long, default_value = "18081")]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_cli_defaults() {
        let cli = ScanCli::try_parse_from(["scan-gateway", "--text", "hello"]).unwrap();
        assert_eq!(cli.args.text.as_deref(), Some("hello"));
        assert_eq!(cli.args.content_type, ContentTypeArg::Auto);
        assert!(cli.args.scan_phase.is_none());
        assert!(cli.args.timeout.is_none());
        assert!(!cli.args.async_scan);
        assert_eq!(cli.output.verbose, 0);
    }

    #[test]
    fn test_scan_cli_all_enums() {
        let cli = ScanCli::try_parse_from([
            "scan-gateway",
            "--file", "a.pdf",
            "--content-type", "pdf",
            "--scan-phase", "output",
            "--profile", "code_assistant",
            "--analysis-mode", "comprehensive",
            "--async",
            "--timeout", "5",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.args.content_type, ContentTypeArg::Pdf);
        assert_eq!(cli.args.scan_phase, Some(ScanPhase::Output));
        assert_eq!(cli.args.profile, Some(Profile::CodeAssistant));
        assert_eq!(cli.args.analysis_mode, Some(AnalysisMode::Comprehensive));
        assert!(cli.args.async_scan);
        assert_eq!(cli.args.timeout, Some(5));
        assert_eq!(cli.output.verbose, 2);
    }

    #[test]
    fn test_scan_cli_rejects_zero_timeout() {
        let err = ScanCli::try_parse_from(["scan-gateway", "--text", "x", "--timeout", "0"]).err().unwrap();
        assert_eq!(err.exit_code(), 2);
        assert!(ScanCli::try_parse_from(["scan-gateway", "--text", "x", "--timeout", "-3"]).is_err());
    }

    #[test]
    fn test_scan_cli_rejects_unknown_profile() {
        let err = ScanCli::try_parse_from(["scan-gateway", "--text", "x", "--profile", "lenient"]).err().unwrap();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_mock_cli_defaults() {
        let cli = MockCli::try_parse_from(["mock-gateway"]).unwrap();
        assert_eq!(cli.args.host, "127.0.0.1");
        assert_eq!(cli.args.port, 18081);
    }
}
