use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Matches elements carrying an attribute with an exact value,
/// optionally restricted to one tag name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeFilter {
    /// Tag the element must have (any tag when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Attribute name to look up
    pub attribute: String,

    /// Value the attribute must equal
    pub value: String,
}

impl AttributeFilter {
    pub fn new(tag: Option<&str>, attribute: &str, value: &str) -> Self {
        Self {
            tag: tag.map(str::to_string),
            attribute: attribute.to_string(),
            value: value.to_string(),
        }
    }
}

/// Tag vocabulary used by the feature extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Element whose first text child is the page title
    #[serde(default = "default_title_tag")]
    pub title_tag: String,

    /// Elements whose text makes up the word stream
    #[serde(default = "default_paragraph_tag")]
    pub paragraph_tag: String,

    /// Elements reported as links
    #[serde(default = "default_link_tag")]
    pub link_tag: String,

    /// Attribute holding a link's destination
    #[serde(default = "default_href_attribute")]
    pub href_attribute: String,

    /// Fallback attributes for a link's display text, in priority order
    #[serde(default = "default_link_text_attributes")]
    pub link_text_attributes: Vec<String>,

    /// Elements whose attribute names are reported as meta tags
    #[serde(default = "default_meta_tag")]
    pub meta_tag: String,

    /// Selects the elements declaring page keywords
    #[serde(default = "default_keywords_filter")]
    pub keywords_filter: AttributeFilter,

    /// Attribute holding the comma separated keyword list
    #[serde(default = "default_keywords_content_attribute")]
    pub keywords_content_attribute: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            title_tag: default_title_tag(),
            paragraph_tag: default_paragraph_tag(),
            link_tag: default_link_tag(),
            href_attribute: default_href_attribute(),
            link_text_attributes: default_link_text_attributes(),
            meta_tag: default_meta_tag(),
            keywords_filter: default_keywords_filter(),
            keywords_content_attribute: default_keywords_content_attribute(),
        }
    }
}

/// How declared keywords are compared with the page's word tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordMatching {
    /// Lowercase the keyword before looking it up
    #[default]
    CaseInsensitive,
    /// Compare the keyword exactly as declared
    Exact,
}

/// Options for the frequency and coverage analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of entries in the most common words list
    #[serde(default = "default_most_common_count")]
    pub most_common_count: usize,

    #[serde(default)]
    pub keyword_matching: KeywordMatching,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            most_common_count: default_most_common_count(),
            keyword_matching: KeywordMatching::default(),
        }
    }
}

/// Options for the HTTP fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Total time allowed for the request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Options for the HTML report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Template file to render; the built-in template is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,
}

/// Complete configuration for a page report run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub extractor: ExtractorConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

impl ReportConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

fn default_title_tag() -> String {
    "title".to_string()
}

fn default_paragraph_tag() -> String {
    "p".to_string()
}

fn default_link_tag() -> String {
    "a".to_string()
}

fn default_href_attribute() -> String {
    "href".to_string()
}

fn default_link_text_attributes() -> Vec<String> {
    vec!["title".to_string(), "alt".to_string()]
}

fn default_meta_tag() -> String {
    "meta".to_string()
}

fn default_keywords_filter() -> AttributeFilter {
    AttributeFilter::new(Some("meta"), "name", "keywords")
}

fn default_keywords_content_attribute() -> String {
    "content".to_string()
}

fn default_most_common_count() -> usize {
    5
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("page-report/", env!("CARGO_PKG_VERSION")).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = ReportConfig::from_json("{}").unwrap();
        assert_eq!(config.extractor.paragraph_tag, "p");
        assert_eq!(config.extractor.link_text_attributes, vec!["title", "alt"]);
        assert_eq!(
            config.extractor.keywords_filter,
            AttributeFilter::new(Some("meta"), "name", "keywords")
        );
        assert_eq!(config.analysis.most_common_count, 5);
        assert_eq!(
            config.analysis.keyword_matching,
            KeywordMatching::CaseInsensitive
        );
        assert_eq!(config.fetch.timeout_secs, 30);
        assert!(config.render.template_path.is_none());
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "extractor": { "paragraph_tag": "div" },
            "analysis": { "most_common_count": 10, "keyword_matching": "exact" }
        }"#;
        let config = ReportConfig::from_json(json).unwrap();
        assert_eq!(config.extractor.paragraph_tag, "div");
        assert_eq!(config.extractor.link_tag, "a");
        assert_eq!(config.analysis.most_common_count, 10);
        assert_eq!(config.analysis.keyword_matching, KeywordMatching::Exact);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "fetch": {{ "timeout_secs": 7 }} }}"#).unwrap();

        let config = ReportConfig::from_file(file.path()).unwrap();
        assert_eq!(config.fetch.timeout_secs, 7);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            ReportConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            ReportConfig::from_file("/nonexistent/page-report.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
