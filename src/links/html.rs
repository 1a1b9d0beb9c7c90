// src/links/html.rs
// =============================================================================
// This module pulls the raw href values out of an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which recovers from broken markup the same way
//   browsers do, so every body produces *some* document
//
// The result is a set (no duplicates) kept in document order. Order is not
// needed for correctness, but it makes the site-map deterministic: children
// are attached in the order their links appear on the page.
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;

// Extracts the distinct href values of all <a> elements
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: Vec<String> of hrefs with any "#fragment" removed, first
// occurrence wins
//
// Example:
//   html = "<a href='/a#x'>A</a><p><a href='/b'>B</a></p><a href='/a'>again</a>"
//   result = ["/a", "/b"]
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // "a[href]" means "all <a> tags that have an href attribute";
    // select() walks the tree depth-first in document order
    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    let mut seen = HashSet::new();
    let mut hrefs = Vec::new();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            let href = strip_fragment(href);
            if seen.insert(href.to_string()) {
                hrefs.push(href.to_string());
            }
        }
    }

    hrefs
}

fn strip_fragment(href: &str) -> &str {
    match href.find('#') {
        Some(index) => &href[..index],
        None => href,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_in_document_order() {
        let html = r#"
            <a href="/c">C</a>
            <div><p><a href="/a">A</a></p></div>
            <a href="/b">B</a>
        "#;
        assert_eq!(extract_hrefs(html), vec!["/c", "/a", "/b"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let html = r#"<a href="/a">one</a><a href="/a">two</a>"#;
        assert_eq!(extract_hrefs(html), vec!["/a"]);
    }

    #[test]
    fn test_fragments_removed_before_dedupe() {
        let html = r##"<a href="/page#s1">1</a><a href="/page#s2">2</a><a href="#top">top</a>"##;
        assert_eq!(extract_hrefs(html), vec!["/page", ""]);
    }

    #[test]
    fn test_ignore_anchors_without_href_and_other_elements() {
        let html = r#"
            <a name="anchor">No href</a>
            <link href="/style.css">
            <img src="/logo.png">
            <area href="/map">
            <a href="/real">Real</a>
        "#;
        assert_eq!(extract_hrefs(html), vec!["/real"]);
    }

    #[test]
    fn test_hrefs_are_returned_raw() {
        let html = r#"<a href="mailto:me@ex.test">Mail</a><a href="http://other.test/x">X</a>"#;
        assert_eq!(
            extract_hrefs(html),
            vec!["mailto:me@ex.test", "http://other.test/x"]
        );
    }

    #[test]
    fn test_broken_markup_still_yields_links() {
        let html = r#"<html><body><div><a href="/ok">unclosed <p><a href="/next">"#;
        assert_eq!(extract_hrefs(html), vec!["/ok", "/next"]);
    }

    #[test]
    fn test_empty_document() {
        assert!(extract_hrefs("").is_empty());
    }
}
