// src/print.rs
// =============================================================================
// Renders a finished site-map for humans (indented text) or machines (JSON).
//
// Text format, two spaces per level, children before the next sibling:
//
//   http://ex.test/
//     http://ex.test/a
//       http://ex.test/a/1
//     http://ex.test/b
// =============================================================================

use serde::Serialize;

use crate::crawl::{PageId, SiteTree};

pub fn render_text(tree: &SiteTree) -> String {
    let mut out = String::new();
    for (depth, page) in tree.walk() {
        out.push_str(&"  ".repeat(depth - 1));
        out.push_str(page.location().as_str());
        out.push('\n');
    }
    out
}

// Nested { "url": ..., "children": [...] } document
#[derive(Debug, Serialize)]
struct PageNode<'a> {
    url: &'a str,
    children: Vec<PageNode<'a>>,
}

fn to_node(tree: &SiteTree, id: PageId) -> PageNode<'_> {
    let page = tree.page(id);
    PageNode {
        url: page.location().as_str(),
        children: page
            .children()
            .iter()
            .map(|&child| to_node(tree, child))
            .collect(),
    }
}

pub fn render_json(tree: &SiteTree) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&to_node(tree, tree.root()))
}
