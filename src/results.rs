use crate::config::AnalysisConfig;
use crate::coverage::missing_keywords;
use crate::extractor::PageFeatures;
use crate::frequency::WordFrequencyTable;
use serde::{Deserialize, Serialize};

/// A link found on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkEntry {
    /// The href attribute, when present
    pub destination: Option<String>,

    /// Anchor text, or its title/alt attribute as a fallback
    pub display_text: String,
}

/// How often a word occurs on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// The finished report for one page.
///
/// Built once by [`ReportSummary::assemble`] or
/// [`ReportSummary::from_features`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    url: String,
    title: String,
    meta_attribute_keys: Vec<String>,
    #[serde(rename = "pageSizeKB")]
    page_size_kb: u64,
    total_word_count: usize,
    unique_word_count: usize,
    most_common_words: Vec<String>,
    /// Every distinct word with its count, in first-occurrence order
    word_frequencies: Vec<WordCount>,
    missing_keywords: Vec<String>,
    links: Vec<LinkEntry>,
}

impl ReportSummary {
    /// Assembles a report with the default analysis options
    pub fn assemble(
        url: &str,
        page_size_kb: u64,
        title: String,
        meta_attribute_keys: Vec<String>,
        keywords: Vec<String>,
        words: Vec<String>,
        links: Vec<LinkEntry>,
    ) -> Self {
        let features = PageFeatures {
            title,
            words,
            links,
            meta_attribute_keys,
            keywords,
        };
        Self::from_features(url, page_size_kb, features, &AnalysisConfig::default())
    }

    /// Assembles a report from extracted features
    pub fn from_features(
        url: &str,
        page_size_kb: u64,
        features: PageFeatures,
        analysis: &AnalysisConfig,
    ) -> Self {
        let table = WordFrequencyTable::build(&features.words);
        let missing = missing_keywords(
            &features.keywords,
            &features.words,
            analysis.keyword_matching,
        );

        Self {
            url: url.to_string(),
            title: features.title,
            meta_attribute_keys: features.meta_attribute_keys,
            page_size_kb,
            total_word_count: features.words.len(),
            unique_word_count: table.unique(),
            most_common_words: table.most_common(analysis.most_common_count),
            word_frequencies: table
                .iter()
                .map(|(word, count)| WordCount {
                    word: word.to_string(),
                    count,
                })
                .collect(),
            missing_keywords: missing,
            links: features.links,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn meta_attribute_keys(&self) -> &[String] {
        &self.meta_attribute_keys
    }

    /// Number of meta attributes found across all meta tags
    pub fn tag_count(&self) -> usize {
        self.meta_attribute_keys.len()
    }

    pub fn page_size_kb(&self) -> u64 {
        self.page_size_kb
    }

    pub fn total_word_count(&self) -> usize {
        self.total_word_count
    }

    pub fn unique_word_count(&self) -> usize {
        self.unique_word_count
    }

    pub fn most_common_words(&self) -> &[String] {
        &self.most_common_words
    }

    pub fn word_frequencies(&self) -> &[WordCount] {
        &self.word_frequencies
    }

    pub fn missing_keywords(&self) -> &[String] {
        &self.missing_keywords
    }

    pub fn links(&self) -> &[LinkEntry] {
        &self.links
    }
}
