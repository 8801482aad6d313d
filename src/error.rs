use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while pulling features out of a parsed document
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The page has no title element, or the title element has no text
    #[error("page has no <{tag}> element with text content")]
    MissingTitle { tag: String },
}

/// Errors raised while retrieving a page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} returned for {url}")]
    Status { status: u16, url: String },

    #[error("request timed out after {0} seconds")]
    Timeout(u64),
}

/// Errors raised while turning a report into text
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("report template not found: {}", .0.display())]
    MissingTemplate(PathBuf),

    #[error("unknown template placeholder '{0}'")]
    UnknownPlaceholder(String),

    #[error("failed to read report template: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to format report: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level error for a full page report run
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Process exit code for this error kind (2 stays reserved for usage errors)
    pub fn exit_code(&self) -> i32 {
        match self {
            ReportError::Config(_) => 3,
            ReportError::Fetch(_) => 4,
            ReportError::Extract(_) => 5,
            ReportError::Render(_) => 6,
            ReportError::Io(_) => 7,
        }
    }
}
