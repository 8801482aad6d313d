use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::parsers::text::tokenize_segments;
use crate::parsers::{Document, Query};
use crate::results::LinkEntry;

/// Raw token streams pulled out of one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFeatures {
    pub title: String,
    pub words: Vec<String>,
    pub links: Vec<LinkEntry>,
    pub meta_attribute_keys: Vec<String>,
    pub keywords: Vec<String>,
}

/// Walks a [`Document`] and extracts the features a report is built from.
///
/// Every method is a pure read of the document, so calling any of them
/// repeatedly on an unchanged document gives the same result.
pub struct FeatureExtractor<'a, D: Document + ?Sized> {
    doc: &'a D,
    config: &'a ExtractorConfig,
}

impl<'a, D: Document + ?Sized> FeatureExtractor<'a, D> {
    pub fn new(doc: &'a D, config: &'a ExtractorConfig) -> Self {
        Self { doc, config }
    }

    /// Runs every extraction once
    pub fn extract(&self) -> Result<PageFeatures, ExtractError> {
        let features = PageFeatures {
            title: self.extract_title()?,
            words: self.extract_words(),
            links: self.extract_links(),
            meta_attribute_keys: self.extract_meta_attribute_keys(),
            keywords: self.extract_keywords(),
        };

        ::log::debug!(
            "Extracted {} words, {} links, {} meta attributes, {} keywords",
            features.words.len(),
            features.links.len(),
            features.meta_attribute_keys.len(),
            features.keywords.len()
        );

        Ok(features)
    }

    /// The first text child of the first title element
    pub fn extract_title(&self) -> Result<String, ExtractError> {
        self.doc
            .find_first(&self.config.title_tag)
            .and_then(|node| node.leading_text().map(str::to_string))
            .ok_or_else(|| ExtractError::MissingTitle {
                tag: self.config.title_tag.clone(),
            })
    }

    /// Lowercase word tokens from all paragraph text, in document order
    pub fn extract_words(&self) -> Vec<String> {
        let paragraphs = self.doc.find_all(&Query::tag(&self.config.paragraph_tag));
        tokenize_segments(paragraphs.iter().map(|p| p.text_content()))
    }

    /// One entry per link element, in document order
    pub fn extract_links(&self) -> Vec<LinkEntry> {
        self.doc
            .find_all(&Query::tag(&self.config.link_tag))
            .into_iter()
            .map(|anchor| {
                let display_text = anchor
                    .leading_text()
                    .or_else(|| {
                        self.config
                            .link_text_attributes
                            .iter()
                            .filter_map(|name| anchor.attr(name))
                            .find(|value| !value.is_empty())
                    })
                    .unwrap_or_default()
                    .to_string();

                LinkEntry {
                    destination: anchor
                        .attr(&self.config.href_attribute)
                        .map(str::to_string),
                    display_text,
                }
            })
            .collect()
    }

    /// Attribute names of every meta element, flattened in document order
    pub fn extract_meta_attribute_keys(&self) -> Vec<String> {
        self.doc
            .find_all(&Query::tag(&self.config.meta_tag))
            .iter()
            .flat_map(|meta| meta.attribute_names().map(str::to_string))
            .collect()
    }

    /// Comma separated keywords declared by the keywords meta elements.
    ///
    /// Pieces that are empty after trimming are dropped, so a page without
    /// any keywords declaration yields an empty list.
    pub fn extract_keywords(&self) -> Vec<String> {
        let declared = self
            .doc
            .find_all(&Query::Attribute(self.config.keywords_filter.clone()))
            .iter()
            .filter_map(|node| {
                let content = node.attr(&self.config.keywords_content_attribute);
                if content.is_none() {
                    ::log::debug!("Keywords element without a content attribute skipped");
                }
                content.map(str::to_string)
            })
            .collect::<Vec<_>>()
            .join(",");

        declared
            .split(',')
            .map(str::trim)
            .filter(|kw| !kw.is_empty())
            .map(str::to_string)
            .collect()
    }
}
