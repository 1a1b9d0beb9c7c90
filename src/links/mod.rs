// src/links/mod.rs
// =============================================================================
// This module turns an HTML page into the list of pages it links to.
//
// Submodules:
// - html: Extracts raw href values from <a> elements
// - filter: Resolves them against the page URL and keeps same-site links
//
// Both are pure functions: the crawler calls them while it scans a page.
// =============================================================================

mod filter;
mod html;

pub use filter::{is_crawlable_scheme, normalize_link, same_host};
pub use html::extract_hrefs;
