// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "link-tally",
    version,
    about = "Crawl a website and count how often each page is linked internally",
    long_about = "link-tally starts at a URL, follows every link that stays on the same host \
                  and reports how many internal links point at each page it found."
)]
pub struct Cli {
    /// Website URL to start from (e.g., https://example.com)
    pub website_url: String,

    /// How many pages may be fetched at the same time
    #[arg(long, default_value_t = 5)]
    pub max_concurrency: usize,

    /// Stop recording new pages once this many have been found
    #[arg(long, default_value_t = 10)]
    pub max_pages: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Output the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
