use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Kind of content sent to the Gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Image,
    Pdf,
    Document,
}

impl ContentType {
    /// Infer a file-oriented content type from a path's extension.
    pub fn from_path(path: &std::path::Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "tif" | "tiff" => Self::Image,
            "pdf" => Self::Pdf,
            _ => Self::Document,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Pdf => "pdf",
            Self::Document => "document",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content type as accepted on the command line, where `auto` defers the
/// decision until the content source is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ContentTypeArg {
    #[default]
    Auto,
    Text,
    Image,
    Pdf,
    Document,
}

impl ContentTypeArg {
    /// The explicit content type, or `None` for `auto`.
    pub fn explicit(self) -> Option<ContentType> {
        match self {
            Self::Auto => None,
            Self::Text => Some(ContentType::Text),
            Self::Image => Some(ContentType::Image),
            Self::Pdf => Some(ContentType::Pdf),
            Self::Document => Some(ContentType::Document),
        }
    }
}

/// Whether the scanned content is user input or model output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScanPhase {
    #[default]
    Input,
    Output,
}

/// Named policy preset controlling scan strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Profile {
    Strict,
    #[default]
    Balanced,
    Permissive,
    CodeAssistant,
    AiSafety,
}

/// Speed/thoroughness tradeoff for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    Fast,
    #[default]
    Secure,
    Comprehensive,
}
