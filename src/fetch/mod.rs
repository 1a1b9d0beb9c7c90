// src/fetch/mod.rs
// =============================================================================
// This module talks to web servers.
//
// Submodules:
// - http: HEAD probe + GET download, and response classification
// =============================================================================

mod http;

pub use http::{is_eligible_status, is_html, FetchedPage, Fetcher};
