// src/fetch/http.rs
// =============================================================================
// This module downloads pages that are worth mining for links.
//
// Key functionality:
// - Sends a HEAD request first (lightweight, no body download) so we never
//   download large images, PDFs or archives just to find out they are not HTML
// - Sends the full GET only when the probe looks like an HTML page
// - Classifies every response: a page is "eligible" when its status is in
//   [200, 400) and a Content-Type header starts with text/html
//
// Redirects are followed by reqwest, so the final URL is reported back to the
// caller and used to resolve relative links.
//
// Rust concepts:
// - async/await: For concurrent network I/O
// - Result<T, E>: FetchError says why a page was skipped
// =============================================================================

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use url::Url;

use crate::crawl::CrawlConfig;
use crate::error::{CrawlError, FetchError};

// An eligible page, downloaded in full
#[derive(Debug)]
pub struct FetchedPage {
    /// Where the GET ended up after following redirects
    pub final_url: Url,
    pub body: String,
}

// Wraps a reqwest Client configured for crawling
//
// Client is cheap to clone (it's a reference counter internally), so
// every crawl task can hold its own Fetcher.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &CrawlConfig) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    // Probes and then downloads a page
    //
    // Returns: the page body if both the probe and the GET are eligible,
    // otherwise the reason the page was skipped
    pub async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let probe = self
            .client
            .head(url.clone())
            .send()
            .await
            .map_err(FetchError::Transport)?;
        classify(&probe)?;
        drop(probe);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::Transport)?;
        classify(&response)?;

        let final_url = response.url().clone();

        // text() consumes the response, so the connection goes back to the
        // pool whether decoding succeeds or not
        let body = response.text().await.map_err(FetchError::Body)?;

        Ok(FetchedPage { final_url, body })
    }
}

// Checks whether a response is worth mining for links
fn classify(response: &Response) -> Result<(), FetchError> {
    let status = response.status();
    if !is_eligible_status(status) {
        return Err(FetchError::Status(status));
    }

    if !is_html(response.headers()) {
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        return Err(FetchError::NotHtml(content_type));
    }

    Ok(())
}

// HTTP status codes:
// - 200-299: Success
// - 300-399: Redirect (normally already followed by reqwest)
// - 400-599: Client/server errors, nothing to mine
pub fn is_eligible_status(status: StatusCode) -> bool {
    (200..400).contains(&status.as_u16())
}

// True when at least one Content-Type header value starts with text/html.
// Matching is case-insensitive ("Text/HTML; charset=UTF-8" counts).
pub fn is_html(headers: &HeaderMap) -> bool {
    headers.get_all(CONTENT_TYPE).iter().any(|value| {
        value
            .to_str()
            .map(|v| v.trim_start().to_ascii_lowercase().starts_with("text/html"))
            .unwrap_or(false)
    })
}
