pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

use crate::config::AttributeFilter;

pub use html::HtmlDocument;

/// Content of an element: either literal text or a nested element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeContent {
    Text(String),
    Element(Node),
}

/// An element detached from the underlying parse tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Lowercase tag name
    pub tag: String,
    /// Attributes in source order
    pub attributes: Vec<(String, String)>,
    /// Child content in source order
    pub children: Vec<NodeContent>,
}

impl Node {
    /// Creates an element with no children
    pub fn new(tag: &str, attributes: &[(&str, &str)]) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            children: Vec::new(),
        }
    }

    /// Appends a text child
    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(NodeContent::Text(text.to_string()));
        self
    }

    /// Appends an element child
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(NodeContent::Element(child));
        self
    }

    /// Value of the named attribute, if present
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attribute names in source order
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|(k, _)| k.as_str())
    }

    /// The text of the first child, when that child is a text node
    pub fn leading_text(&self) -> Option<&str> {
        match self.children.first()? {
            NodeContent::Text(text) => Some(text),
            NodeContent::Element(_) => None,
        }
    }

    /// All descendant text concatenated in document order
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                NodeContent::Text(text) => out.push_str(text),
                NodeContent::Element(node) => node.collect_text(out),
            }
        }
    }
}

/// Lookup criteria for [`Document::find_all`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Every element with this tag name
    Tag(String),
    /// Every element matching the attribute filter
    Attribute(AttributeFilter),
}

impl Query {
    pub fn tag(name: &str) -> Self {
        Query::Tag(name.to_string())
    }

    /// Determines whether an element with this tag and attributes matches
    pub fn matches<'a>(
        &self,
        tag: &str,
        mut attributes: impl Iterator<Item = (&'a str, &'a str)>,
    ) -> bool {
        match self {
            Query::Tag(name) => tag.eq_ignore_ascii_case(name),
            Query::Attribute(filter) => {
                if let Some(required) = &filter.tag {
                    if !tag.eq_ignore_ascii_case(required) {
                        return false;
                    }
                }
                attributes.any(|(k, v)| k == filter.attribute && v == filter.value)
            }
        }
    }
}

/// A parsed document that can be queried by tag or attribute
pub trait Document {
    /// First element with the given tag, in document order
    fn find_first(&self, tag: &str) -> Option<Node>;

    /// Every element matching the query, in document order
    fn find_all(&self, query: &Query) -> Vec<Node>;
}
