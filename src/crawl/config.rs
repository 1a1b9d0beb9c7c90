// src/crawl/config.rs
// =============================================================================
// Settings for a crawl.
//
// The depth budget is the only thing bounding how big a crawl can get. The
// root page is depth 1, and a page at depth d may only gain children while
// d < max_depth. So:
//   max_depth = 1  -> just the starting page, nothing is fetched
//   max_depth = 2  -> starting page + the pages it links to
//   unbounded      -> follow links until every reachable page is in the tree
// =============================================================================

use std::fmt;
use std::time::Duration;

/// How deep the site-map may grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxDepth {
    /// No depth limit. Only the tree-wide dedupe stops the crawl, so a large
    /// site will be crawled in full.
    #[default]
    Unbounded,
    /// Pages deeper than this (root = 1) are never added.
    Limited(usize),
}

impl MaxDepth {
    /// Whether a page at `depth` (root = 1) may be expanded.
    pub fn allows_children_at(self, depth: usize) -> bool {
        match self {
            MaxDepth::Unbounded => true,
            MaxDepth::Limited(max) => depth < max,
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, MaxDepth::Unbounded)
    }
}

// Any negative number (conventionally -1) means "unbounded"
impl From<i64> for MaxDepth {
    fn from(value: i64) -> Self {
        match usize::try_from(value) {
            Ok(depth) => MaxDepth::Limited(depth),
            Err(_) => MaxDepth::Unbounded,
        }
    }
}

impl fmt::Display for MaxDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxDepth::Unbounded => write!(f, "unbounded"),
            MaxDepth::Limited(depth) => write!(f, "{}", depth),
        }
    }
}

/// Configuration for a [`Crawler`](super::Crawler).
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub max_depth: MaxDepth,
    /// Per-request timeout, applied to both the HEAD probe and the GET
    pub timeout: Duration,
    /// How many redirect hops the HTTP client follows before giving up
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_depth: MaxDepth::Unbounded,
            timeout: Duration::from_secs(10),
            max_redirects: 10,
            user_agent: format!("sitemapper/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl CrawlConfig {
    pub fn with_max_depth(mut self, max_depth: impl Into<MaxDepth>) -> Self {
        self.max_depth = max_depth.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
