pub mod config;
pub mod coverage;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod frequency;
pub mod parsers;
pub mod render;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ReportConfig;
pub use error::ReportError;
pub use extractor::{FeatureExtractor, PageFeatures};
pub use render::{OutputFormat, render_report, save_report};
pub use results::{LinkEntry, ReportSummary, WordCount};

use parsers::HtmlDocument;
use std::path::{Path, PathBuf};

/// Runs the synchronous analysis pipeline on markup that was already fetched
pub fn analyze_html(
    url: &str,
    html: &str,
    page_size_kb: u64,
    config: &ReportConfig,
) -> Result<ReportSummary, ReportError> {
    let doc = HtmlDocument::parse(html);
    let features = FeatureExtractor::new(&doc, &config.extractor).extract()?;
    Ok(ReportSummary::from_features(
        url,
        page_size_kb,
        features,
        &config.analysis,
    ))
}

/// Builder for a single page report
pub struct PageReport {
    url: String,
    config: ReportConfig,
}

impl PageReport {
    /// Create a new builder for the given page URL
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            config: ReportConfig::default(),
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let config = ReportConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Apply configuration from a JSON string
    pub fn with_config_str(self, json: &str) -> Result<Self, ReportError> {
        let config = ReportConfig::from_json(json)?;
        Ok(self.with_config(config))
    }

    /// Override the fetch timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.config.fetch.timeout_secs = timeout_secs;
        self
    }

    /// Override the length of the most common words list
    pub fn with_most_common_count(mut self, count: usize) -> Self {
        self.config.analysis.most_common_count = count;
        self
    }

    /// Override the HTML report template
    pub fn with_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.render.template_path = Some(path.into());
        self
    }

    /// The configuration the report will run with
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Fetch the page and build its report
    pub async fn generate(&self) -> Result<ReportSummary, ReportError> {
        let page = fetch::fetch(&self.url, &self.config.fetch).await?;
        let html = page.decode();
        let report = analyze_html(&self.url, &html, page.size_kb(), &self.config)?;

        ::log::info!(
            "Report for {}: {} words ({} unique), {} links",
            self.url,
            report.total_word_count(),
            report.unique_word_count(),
            report.links().len()
        );
        Ok(report)
    }
}
