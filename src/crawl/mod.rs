// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Depth-first site-map tree, children in link discovery order
// - Respects same-domain restriction (doesn't crawl external sites)
// - Configurable depth limit (or none at all)
// - One concurrent task per discovered page
// - Every URL appears at most once in the whole tree
//
// Submodules:
// - config: CrawlConfig and the MaxDepth budget
// - tree: the SiteTree arena and its read-only API
// - scan: the concurrent crawler that fills the tree
// =============================================================================

mod config;
mod scan;
mod tree;

pub use config::{CrawlConfig, MaxDepth};
pub use scan::{crawl, Crawler};
pub use tree::{Page, PageId, SiteTree, Walk};
