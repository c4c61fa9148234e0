use serde::{Deserialize, Serialize};

/// Default analysis endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://resume-analyzer-two.vercel.app/analyze-resume";

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Settings for the remote resume analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Full URL the resume is POSTed to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Multipart field name carrying the file.
    #[serde(default = "default_field_name")]
    pub field_name: String,
    /// Extensions accepted by the file picker (e.g. ".pdf").
    #[serde(default = "default_accept")]
    pub accept: Vec<String>,
    /// Keep a cookie store and send cookies with the upload.
    #[serde(default = "default_with_credentials")]
    pub with_credentials: bool,
    /// Extra `Cookie` header sent when credentials are enabled.
    #[serde(default)]
    pub cookie: Option<String>,
    /// Request timeout in seconds. Unset means the transport default.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw / spinner tick in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Page shown on startup.
    #[serde(default)]
    pub initial_page: PageKind,
}

/// Top-level pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Counter,
    #[default]
    Analyzer,
}

impl PageKind {
    pub fn title(self) -> &'static str {
        match self {
            PageKind::Counter => "Counter",
            PageKind::Analyzer => "Resume Analyzer",
        }
    }

    pub fn next(self) -> Self {
        match self {
            PageKind::Counter => PageKind::Analyzer,
            PageKind::Analyzer => PageKind::Counter,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_field_name() -> String {
    "resume".to_string()
}

fn default_accept() -> Vec<String> {
    vec![".pdf".to_string()]
}

fn default_with_credentials() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            field_name: default_field_name(),
            accept: default_accept(),
            with_credentials: default_with_credentials(),
            cookie: None,
            timeout_seconds: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            initial_page: PageKind::default(),
        }
    }
}
