use serde::Serialize;
use super::options::{AnalysisMode, ContentType, Profile, ScanPhase};

/// Body of `POST /v1/scan`. Optional fields are left out of the JSON entirely
/// when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanRequest {
    pub content: String,
    pub content_type: ContentType,
    pub scan_phase: ScanPhase,
    pub profile: Profile,
    pub analysis_mode: AnalysisMode,
    #[serde(rename = "async")]
    pub async_scan: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_prompt: Option<String>,
}

impl ScanRequest {
    pub fn builder(content: impl Into<String>, content_type: ContentType) -> ScanRequestBuilder {
        ScanRequestBuilder::new(content, content_type)
    }
}

/// Starts from the required fields at their defaults and attaches optional
/// fields one at a time. Empty strings count as "not supplied".
#[derive(Debug, Clone)]
pub struct ScanRequestBuilder {
    request: ScanRequest,
}

impl ScanRequestBuilder {
    pub fn new(content: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            request: ScanRequest {
                content: content.into(),
                content_type,
                scan_phase: ScanPhase::default(),
                profile: Profile::default(),
                analysis_mode: AnalysisMode::default(),
                async_scan: false,
                session_id: None,
                scan_group_id: None,
                request_id: None,
                context: None,
                original_prompt: None,
            },
        }
    }

    pub fn scan_phase(mut self, phase: ScanPhase) -> Self {
        self.request.scan_phase = phase;
        self
    }

    pub fn profile(mut self, profile: Profile) -> Self {
        self.request.profile = profile;
        self
    }

    pub fn analysis_mode(mut self, mode: AnalysisMode) -> Self {
        self.request.analysis_mode = mode;
        self
    }

    pub fn async_scan(mut self, enabled: bool) -> Self {
        self.request.async_scan = enabled;
        self
    }

    pub fn session_id(mut self, value: Option<&str>) -> Self {
        self.request.session_id = non_empty(value);
        self
    }

    pub fn scan_group_id(mut self, value: Option<&str>) -> Self {
        self.request.scan_group_id = non_empty(value);
        self
    }

    pub fn request_id(mut self, value: Option<&str>) -> Self {
        self.request.request_id = non_empty(value);
        self
    }

    pub fn context(mut self, value: Option<&str>) -> Self {
        self.request.context = non_empty(value);
        self
    }

    pub fn original_prompt(mut self, value: Option<&str>) -> Self {
        self.request.original_prompt = non_empty(value);
        self
    }

    pub fn build(self) -> ScanRequest {
        self.request
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
