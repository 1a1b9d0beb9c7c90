// src/crawl/scan.rs
// =============================================================================
// This module builds the site-map tree by crawling concurrently.
//
// How it works (for each page):
// 1. Fetch the page (HEAD probe, then GET). Failures make the page a leaf
// 2. Extract its links, in document order
// 3. Resolve and filter each link (same host, http/https, no fragment)
// 4. Skip links whose URL is already ANYWHERE in the tree
// 5. Attach the rest as children of this page
// 6. Spawn one task per child, one level deeper, and wait for all of them
//
// Steps 4 and 5 happen while holding the tree lock, so two branches running
// at the same time can never both attach the same URL. Children are attached
// before any child task starts, which keeps sibling order equal to document
// order no matter which child finishes first.
//
// Rust concepts:
// - Arc: Shared ownership of the crawl state between tasks
// - tokio::sync::Mutex: One lock for the whole tree
// - BoxFuture: An async fn that calls itself needs a boxed future
// =============================================================================

use futures::future::{join_all, BoxFuture, FutureExt};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use url::Url;

use super::config::{CrawlConfig, MaxDepth};
use super::tree::{PageId, SiteTree};
use crate::error::CrawlError;
use crate::fetch::{FetchedPage, Fetcher};
use crate::links::{extract_hrefs, normalize_link, same_host};

/// Crawls a site with default settings.
///
/// `max_depth` counts the root as depth 1; any negative value (conventionally
/// `-1`) disables the limit. An unbounded crawl of a large site follows every
/// same-host link it finds, so use it with care.
///
/// Fails only when `start_url` is not a valid absolute URL: unreachable or
/// non-HTML pages just end up as leaves.
pub async fn crawl(start_url: &str, max_depth: i64) -> Result<SiteTree, CrawlError> {
    let config = CrawlConfig::default().with_max_depth(max_depth);
    Crawler::new(config)?.crawl(start_url).await
}

pub struct Crawler {
    config: CrawlConfig,
    fetcher: Fetcher,
}

impl Crawler {
    pub fn new(config: CrawlConfig) -> Result<Self, CrawlError> {
        let fetcher = Fetcher::new(&config)?;
        Ok(Self { config, fetcher })
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Builds the site-map rooted at `start_url`.
    ///
    /// Returns once every spawned scan across the whole tree has finished.
    pub async fn crawl(&self, start_url: &str) -> Result<SiteTree, CrawlError> {
        let mut start = Url::parse(start_url).map_err(|source| CrawlError::InvalidUrl {
            url: start_url.to_string(),
            source,
        })?;
        start.set_fragment(None);

        let max_depth = self.config.max_depth;
        if max_depth.is_unbounded() {
            tracing::warn!(
                "Crawling {} with unbounded depth: every reachable page on the site will be fetched",
                start
            );
        }
        tracing::info!("Crawling {} (max depth: {})", start, max_depth);
        let started = Instant::now();

        let tree = SiteTree::new(start);
        let root = tree.root();
        let state = Arc::new(CrawlState {
            fetcher: self.fetcher.clone(),
            max_depth,
            tree: Mutex::new(tree),
        });

        Arc::clone(&state).scan(root, 1).await;

        // Every task has been joined, so this is normally the last reference
        let tree = match Arc::try_unwrap(state) {
            Ok(state) => state.tree.into_inner(),
            Err(state) => {
                let guard = state.tree.lock().await;
                guard.clone()
            }
        };

        tracing::info!(
            "Crawled {}: {} page(s) in {:.2}s",
            tree.page(tree.root()).location(),
            tree.len(),
            started.elapsed().as_secs_f64()
        );
        Ok(tree)
    }
}

// State shared by every scan task of one crawl
struct CrawlState {
    fetcher: Fetcher,
    max_depth: MaxDepth,
    tree: Mutex<SiteTree>,
}

impl CrawlState {
    // Scans one page, then its children concurrently
    //
    // Parameters:
    //   page: the page to expand (already in the tree)
    //   depth: its depth, the root being 1
    fn scan(self: Arc<Self>, page: PageId, depth: usize) -> BoxFuture<'static, ()> {
        async move {
            // Out of depth budget: the page stays a leaf and is not fetched
            if !self.max_depth.allows_children_at(depth) {
                return;
            }

            let location = self.tree.lock().await.page(page).location().clone();

            let FetchedPage { mut final_url, body } = match self.fetcher.fetch(&location).await {
                Ok(fetched) => fetched,
                Err(e) => {
                    tracing::debug!("Not expanding {}: {}", location, e);
                    return;
                }
            };
            final_url.set_fragment(None);

            if final_url != location {
                // The start page defines the site: if it redirects (e.g.
                // http://example.com -> https://www.example.com/), the root
                // moves to the final URL and its host becomes the scope
                let relocated = self.tree.lock().await.relocate_root(page, final_url.clone());
                if relocated {
                    tracing::info!("Start page {} redirected to {}", location, final_url);
                } else if !same_host(&location, &final_url) {
                    // Any other page redirected off-site: not ours to follow
                    tracing::debug!("Not expanding {}: redirected to {}", location, final_url);
                    return;
                }
            }

            let hrefs = extract_hrefs(&body);
            drop(body);

            let children = self.attach_children(page, &final_url, &hrefs).await;
            tracing::debug!(
                "{} [depth {}]: {} link(s), {} new page(s)",
                location,
                depth,
                hrefs.len(),
                children.len()
            );

            let tasks: Vec<_> = children
                .into_iter()
                .map(|child| tokio::spawn(Arc::clone(&self).scan(child, depth + 1)))
                .collect();

            for result in join_all(tasks).await {
                if let Err(e) = result {
                    tracing::error!("Scan task under {} failed: {}", location, e);
                }
            }
        }
        .boxed()
    }

    // Dedupes the page's links against the whole tree and attaches the new
    // ones, all under a single lock
    //
    // Returns: ids of the attached children, in document order
    async fn attach_children(&self, page: PageId, base: &Url, hrefs: &[String]) -> Vec<PageId> {
        let mut tree = self.tree.lock().await;
        let root = tree.root_of(page);

        let mut children = Vec::new();
        for href in hrefs {
            let Some(url) = normalize_link(base, href) else {
                continue;
            };

            if tree.exists(&url, root) {
                continue;
            }

            children.push(tree.attach_child(page, url));
        }
        children
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does scan() return BoxFuture instead of being an async fn?
//    - An async fn's future contains the futures of everything it awaits
//    - A recursive async fn would contain itself: infinite size
//    - Boxing puts the inner future on the heap, so its size is known
//
// 2. Why tokio::spawn and not just join_all on the futures?
//    - spawn hands each child to the runtime's worker threads, so sibling
//      pages are fetched in parallel, not just interleaved on one task
//    - spawned futures must be 'static, which is why scan() takes
//      Arc<Self> (an owned handle) instead of &self
//
// 3. Why tokio::sync::Mutex instead of std::sync::Mutex?
//    - lock().await yields to other tasks instead of blocking a thread
//    - It can't be poisoned, so there's no Result to unwrap
// -----------------------------------------------------------------------------
