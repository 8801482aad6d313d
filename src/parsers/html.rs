use crate::parsers::{Document, Node, NodeContent, Query};
use scraper::{ElementRef, Html};

/// [`Document`] backed by a `scraper` parse tree
pub struct HtmlDocument {
    doc: Html,
}

impl HtmlDocument {
    /// Parses an HTML page; malformed markup is recovered, never rejected
    pub fn parse(html: &str) -> Self {
        let doc = Html::parse_document(html);
        if !doc.errors.is_empty() {
            ::log::debug!("HTML parser recovered from {} errors", doc.errors.len());
        }
        Self { doc }
    }

    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.doc.root_element().descendants().filter_map(ElementRef::wrap)
    }
}

impl Document for HtmlDocument {
    fn find_first(&self, tag: &str) -> Option<Node> {
        self.elements()
            .find(|e| e.value().name().eq_ignore_ascii_case(tag))
            .map(to_node)
    }

    fn find_all(&self, query: &Query) -> Vec<Node> {
        self.elements()
            .filter(|e| query.matches(e.value().name(), e.value().attrs()))
            .map(to_node)
            .collect()
    }
}

/// Copies an element and its subtree out of the parse tree
fn to_node(element: ElementRef<'_>) -> Node {
    let value = element.value();
    let children = element
        .children()
        .filter_map(|child| match child.value() {
            scraper::Node::Text(text) => Some(NodeContent::Text(String::from(&**text))),
            scraper::Node::Element(_) => {
                ElementRef::wrap(child).map(|e| NodeContent::Element(to_node(e)))
            }
            _ => None,
        })
        .collect();

    Node {
        tag: value.name().to_ascii_lowercase(),
        attributes: value
            .attrs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        children,
    }
}
