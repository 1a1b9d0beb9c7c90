// src/lib.rs
// =============================================================================
// sitemapper: builds a site-map tree of a web domain.
//
// Starting from one URL, the crawler fetches each page, follows the links
// that stay on the same host, and records every page it discovers exactly
// once in a tree that mirrors the order links were found in.
//
// Example:
//
//   let tree = sitemapper::crawl("https://example.com", 3).await?;
//   print!("{}", sitemapper::print::render_text(&tree));
//
// Modules:
// - crawl: the concurrent crawler, its configuration and the SiteTree
// - fetch: HTTP probing/downloading and response classification
// - links: href extraction and same-site filtering
// - print: text and JSON renderings of a finished tree
// - error: error types
// =============================================================================

pub mod crawl;
pub mod error;
pub mod fetch;
pub mod links;
pub mod print;

#[cfg(test)]
mod test_support;

pub use crawl::{crawl, CrawlConfig, Crawler, MaxDepth, Page, PageId, SiteTree};
pub use error::{CrawlError, FetchError};
