// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing) on stderr
// 3. Crawl the site into a tree
// 4. Print the tree on stdout (text or JSON)
// 5. Exit with proper code (0 = success, 1 = error)
// =============================================================================

mod cli;

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use sitemapper::{print, CrawlConfig, Crawler};
use tracing_subscriber::EnvFilter;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    let config = CrawlConfig::default()
        .with_max_depth(cli.max_depth)
        .with_timeout(Duration::from_secs(cli.timeout));

    eprintln!("🔍 Mapping website: {}", cli.url);
    eprintln!("📊 Max crawl depth: {}", config.max_depth);

    let started = Instant::now();
    let crawler = Crawler::new(config)?;
    let tree = crawler.crawl(&cli.url).await?;

    if cli.json {
        println!("{}", print::render_json(&tree)?);
    } else {
        print!("{}", print::render_text(&tree));
    }

    eprintln!(
        "📄 Found {} page(s) in {:.2}s",
        tree.len(),
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

// RUST_LOG wins when set; otherwise -v flags pick the level
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
