// src/links/filter.rs
// =============================================================================
// This module decides whether a link found on a page belongs in the site-map.
//
// How it works:
// 1. Resolve the raw href against the page URL (relative links become absolute)
// 2. Drop the #fragment so "/page#a" and "/page#b" are the same page
// 3. Keep only http/https links on the same host as the page
//
// Everything here is a pure function: no network, no shared state.
//
// Rust concepts:
// - Option<T>: None means "skip this link", there is no error to report
// - Url::join: RFC 3986 relative reference resolution
// =============================================================================

use url::Url;

// Resolves a raw href against the page it was found on and applies the
// scope policy
//
// Parameters:
//   base: the URL of the page the link was found on
//   href: the raw href value (might be relative, might be absolute)
//
// Returns: Some(absolute_url) without a fragment, or None if the link is
// malformed, uses another scheme, or points at another host
//
// Examples:
//   base = "http://ex.test/docs/"
//   href = "intro#top"             -> Some("http://ex.test/docs/intro")
//   href = "//ex.test/a"           -> Some("http://ex.test/a")
//   href = "http://other.test/x"   -> None (foreign host)
//   href = "mailto:me@ex.test"     -> None (not http/https)
pub fn normalize_link(base: &Url, href: &str) -> Option<Url> {
    let mut url = match base.join(href.trim()) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!("Skipping malformed link '{}' on {}: {}", href, base, e);
            return None;
        }
    };

    url.set_fragment(None);

    if !is_crawlable_scheme(&url) {
        tracing::debug!("Skipping non-http link {} on {}", url, base);
        return None;
    }

    if !same_host(base, &url) {
        tracing::debug!("Skipping foreign link {} on {}", url, base);
        return None;
    }

    Some(url)
}

// Only http and https pages can be fetched and mined for links.
// Relative hrefs inherit the base scheme, so they always pass when the base
// is http(s).
pub fn is_crawlable_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

// Same host, and either the same effective port or both on their scheme's
// default port. So http://ex.test/ and https://ex.test/ are one site, and so
// are http://ex.test:443/ and https://ex.test/, while 127.0.0.1:8080 and
// 127.0.0.1:9090 are not. Hosts are already lowercased by the url crate,
// which makes the comparison case-insensitive.
pub fn same_host(a: &Url, b: &Url) -> bool {
    if a.host_str() != b.host_str() {
        return false;
    }
    let both_default = a.port().is_none() && b.port().is_none();
    both_default || a.port_or_known_default() == b.port_or_known_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://ex.test/docs/page").unwrap()
    }

    fn link(href: &str) -> Option<String> {
        normalize_link(&base(), href).map(|u| u.to_string())
    }

    #[test]
    fn test_resolve_root_relative_link() {
        assert_eq!(link("/a"), Some("http://ex.test/a".to_string()));
    }

    #[test]
    fn test_resolve_path_relative_link() {
        assert_eq!(link("other"), Some("http://ex.test/docs/other".to_string()));
        assert_eq!(link("../up"), Some("http://ex.test/up".to_string()));
    }

    #[test]
    fn test_keep_query_drop_fragment() {
        assert_eq!(
            link("/search?q=rust#results"),
            Some("http://ex.test/search?q=rust".to_string())
        );
    }

    #[test]
    fn test_fragments_collapse_to_same_url() {
        assert_eq!(link("/page#section1"), link("/page#section2"));
    }

    #[test]
    fn test_fragment_only_link_is_the_page_itself() {
        assert_eq!(link("#top"), Some("http://ex.test/docs/page".to_string()));
    }

    #[test]
    fn test_skip_foreign_host() {
        assert_eq!(link("http://other.test/x"), None);
        assert_eq!(link("//other.test/x"), None);
    }

    #[test]
    fn test_host_comparison_ignores_case() {
        assert_eq!(link("http://EX.test/a"), Some("http://ex.test/a".to_string()));
    }

    #[test]
    fn test_other_port_is_foreign() {
        assert_eq!(link("http://ex.test:8080/a"), None);
    }

    #[test]
    fn test_same_host_other_http_scheme_is_kept() {
        assert_eq!(link("https://ex.test/secure"), Some("https://ex.test/secure".to_string()));
    }

    #[test]
    fn test_same_host_ports() {
        let same = |a: &str, b: &str| same_host(&Url::parse(a).unwrap(), &Url::parse(b).unwrap());

        assert!(same("http://ex.test/", "https://ex.test/"));
        assert!(same("http://ex.test:80/", "https://ex.test/"));
        assert!(same("http://ex.test:443/", "https://ex.test/"));
        assert!(same("https://ex.test:443/", "https://ex.test/"));
        assert!(same("http://ex.test:8080/", "https://ex.test:8080/"));
        assert!(!same("http://ex.test:8080/", "http://ex.test/"));
        assert!(!same("http://ex.test:8080/", "http://ex.test:9090/"));
        assert!(!same("http://ex.test/", "http://www.ex.test/"));
    }

    #[test]
    fn test_explicit_default_port_of_other_scheme_is_kept() {
        let base = Url::parse("https://ex.test/").unwrap();
        assert_eq!(
            normalize_link(&base, "http://ex.test:443/a").map(|u| u.to_string()),
            Some("http://ex.test:443/a".to_string())
        );
    }

    #[test]
    fn test_skip_non_http_schemes() {
        assert_eq!(link("mailto:test@ex.test"), None);
        assert_eq!(link("javascript:void(0)"), None);
        assert_eq!(link("ftp://ex.test/file"), None);
        assert_eq!(link("tel:+123456"), None);
    }

    #[test]
    fn test_skip_malformed_link() {
        assert_eq!(link("http://[::1"), None);
    }
}
