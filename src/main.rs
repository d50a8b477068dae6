// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (to stderr, so stdout only carries the report)
// 3. Crawl the website
// 4. Print the report
// 5. Exit with proper code (0 = success, 2 = error)
// =============================================================================

mod cli;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use link_tally::page::HttpSource;
use link_tally::{render_report, run_crawl_with, CrawlConfig, CrawlStats, Report};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<i32> {
    let config = CrawlConfig::new(&cli.website_url, cli.max_concurrency, cli.max_pages)?;
    let source = HttpSource::new(Duration::from_secs(cli.timeout_secs))?;

    // Ctrl-C stops the crawl but still prints what was found so far
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("ctrl-c: stopping crawl");
                cancel.cancel();
            }
        });
    }

    let counts = run_crawl_with(config, Arc::new(source), cancel).await;

    let report = render_report(&counts, &cli.website_url);
    print_report(&report, CrawlStats::from_counts(&counts), cli.json)?;

    Ok(0)
}

// Prints the report either as text or JSON
fn print_report(report: &Report, stats: CrawlStats, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", report);
        println!();
        println!("📊 Summary:");
        println!("   📄 Pages: {}", stats.distinct_pages);
        println!("   🔗 Internal links: {}", stats.total_references);
    }
    Ok(())
}
