use crate::config::AttributeFilter;
use crate::parsers::{Document, HtmlDocument, NodeContent, Query};

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Sample</title>
  <meta charset="utf-8">
  <meta name="keywords" content="one, two">
  <meta property="og:title" content="Sample">
</head>
<body>
  <p>First <em>para</em></p>
  <div name="keywords" content="div keywords">not a meta</div>
  <p>Second</p>
  <A HREF="/upper">Upper</A>
</body>
</html>"#;

    #[test]
    fn test_find_first() {
        let doc = HtmlDocument::parse(PAGE);
        let title = doc.find_first("title").unwrap();
        assert_eq!(title.tag, "title");
        assert_eq!(title.leading_text(), Some("Sample"));
        assert!(doc.find_first("table").is_none());
    }

    #[test]
    fn test_find_all_by_tag_in_document_order() {
        let doc = HtmlDocument::parse(PAGE);
        let paragraphs = doc.find_all(&Query::tag("p"));
        let texts: Vec<String> = paragraphs.iter().map(|p| p.text_content()).collect();
        assert_eq!(texts, vec!["First para", "Second"]);
    }

    #[test]
    fn test_tag_names_are_case_insensitive() {
        let doc = HtmlDocument::parse(PAGE);
        let anchors = doc.find_all(&Query::tag("A"));
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].attr("href"), Some("/upper"));
    }

    #[test]
    fn test_find_all_by_attribute() {
        let doc = HtmlDocument::parse(PAGE);

        let any_tag = doc.find_all(&Query::Attribute(AttributeFilter::new(
            None, "name", "keywords",
        )));
        assert_eq!(any_tag.len(), 2);

        let meta_only = doc.find_all(&Query::Attribute(AttributeFilter::new(
            Some("meta"),
            "name",
            "keywords",
        )));
        assert_eq!(meta_only.len(), 1);
        assert_eq!(meta_only[0].attr("content"), Some("one, two"));
    }

    #[test]
    fn test_attribute_order_preserved() {
        let doc = HtmlDocument::parse(r#"<meta name="a" content="b" http-equiv="c">"#);
        let meta = doc.find_first("meta").unwrap();
        let names: Vec<&str> = meta.attribute_names().collect();
        assert_eq!(names, vec!["name", "content", "http-equiv"]);
    }

    #[test]
    fn test_children_are_tagged() {
        let doc = HtmlDocument::parse(r#"<a href="/x"><img alt="pic"> caption</a>"#);
        let anchor = doc.find_first("a").unwrap();
        assert!(matches!(anchor.children[0], NodeContent::Element(ref img) if img.tag == "img"));
        assert!(matches!(anchor.children[1], NodeContent::Text(ref t) if t == " caption"));
        assert_eq!(anchor.leading_text(), None);
    }

    #[test]
    fn test_malformed_markup_is_recovered() {
        let doc = HtmlDocument::parse("<p>unclosed <b>bold<p>next");
        let texts: Vec<String> = doc
            .find_all(&Query::tag("p"))
            .iter()
            .map(|p| p.text_content())
            .collect();
        assert_eq!(texts, vec!["unclosed bold", "next"]);
    }
}
