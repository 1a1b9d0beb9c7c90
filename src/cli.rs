// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Usage:
//   sitemapper <URL> [MAX_DEPTH] [--timeout SECS] [--json] [-v...]
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "sitemapper",
    version,
    about = "Builds a site-map tree of a website by following its links",
    long_about = "sitemapper starts at a URL, follows every link that stays on the same host, \
                  and prints the pages it found as a tree, each page listed once under the \
                  page where it was first discovered."
)]
pub struct Cli {
    /// Website URL to start from (e.g., https://example.com)
    ///
    /// This is a positional argument (required)
    pub url: String,

    /// Maximum crawl depth, the starting page being depth 1
    ///
    /// Depth 1 = just the starting page
    /// Depth 2 = starting page + all pages it links to
    /// -1 (default) = no limit. Careful: this crawls the entire site
    #[arg(default_value_t = -1, allow_negative_numbers = true)]
    pub max_depth: i64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Output the tree in JSON format instead of indented text
    #[arg(long)]
    pub json: bool,

    /// More logging on stderr (-v: info, -vv: debug). RUST_LOG overrides this
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
