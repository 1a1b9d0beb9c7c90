// src/error.rs
// =============================================================================
// Error types for the crawler library.
//
// There are two tiers of failure:
// - CrawlError: returned to the caller of crawl(). Only a bad start URL (or an
//   HTTP client that cannot be built) ends up here.
// - FetchError: something went wrong with ONE page. The crawler logs it and
//   treats the page as a leaf. It never escapes crawl().
//
// We use `thiserror` to derive std::error::Error and Display for our enums.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

/// Errors reported to the caller of a crawl.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The start URL could not be parsed as an absolute URL
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be created from the crawl configuration
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Why a single page contributed no children.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network error, timeout, DNS failure, malformed response...
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered outside the accepted [200, 400) range
    #[error("HTTP {0}")]
    Status(StatusCode),

    /// The response is not an HTML document
    #[error("not HTML (content-type: {})", .0.as_deref().unwrap_or("none"))]
    NotHtml(Option<String>),

    /// The body could not be read or decoded
    #[error("failed to read body: {0}")]
    Body(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_message() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = CrawlError::InvalidUrl {
            url: "not a url".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid URL 'not a url'"));
    }

    #[test]
    fn test_not_html_message() {
        let err = FetchError::NotHtml(Some("application/json".to_string()));
        assert_eq!(err.to_string(), "not HTML (content-type: application/json)");

        let err = FetchError::NotHtml(None);
        assert_eq!(err.to_string(), "not HTML (content-type: none)");
    }
}
