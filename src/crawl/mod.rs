// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Concurrent crawling: every discovered link becomes its own task
// - Same-host restriction (doesn't crawl external sites)
// - A cap on how many distinct pages are recorded and fetched
// - A cap on how many pages are being fetched at the same time
// - Counts how often each page is linked to
//
// Shared state, created once per crawl and shared by every task:
// - ledger: normalized URL -> number of internal links to it
// - admission: tokens bounding simultaneous fetches
// - barrier: counts outstanding tasks so we know when we're done
//
// Rust concepts:
// - Arc: shared ownership of the crawl state across spawned tasks
// - Generics: the crawl runs against any PageSource (HTTP or in-memory)
// =============================================================================

mod admission;
mod join;
mod ledger;
mod report;
mod scope;
mod task;

#[cfg(test)]
mod testing;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::info;
use url::Url;

use crate::error::CrawlError;
use crate::page::{HttpSource, PageSource};

use admission::Admission;
use join::JoinBarrier;
use ledger::Ledger;

pub use report::{render_report, CrawlStats, Report, ReportEntry};

// The final ledger: normalized URL -> number of internal links to it
pub type PageCounts = HashMap<String, usize>;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// Validated crawl settings
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    base_url: Url,
    max_pages: usize,
    max_concurrency: usize,
}

impl CrawlConfig {
    pub fn new(seed_url: &str, max_concurrency: usize, max_pages: usize) -> Result<Self, CrawlError> {
        let base_url = Url::parse(seed_url).map_err(|e| {
            CrawlError::InvalidConfig(format!("seed URL '{}' is not an absolute URL: {}", seed_url, e))
        })?;

        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(CrawlError::InvalidConfig(format!(
                "seed URL '{}' must use http or https",
                seed_url
            )));
        }
        if base_url.host_str().is_none() {
            return Err(CrawlError::InvalidConfig(format!("seed URL '{}' has no host", seed_url)));
        }
        if max_pages == 0 {
            return Err(CrawlError::InvalidConfig("max pages must be at least 1".to_string()));
        }
        if max_concurrency == 0 {
            return Err(CrawlError::InvalidConfig("max concurrency must be at least 1".to_string()));
        }

        Ok(Self { base_url, max_pages, max_concurrency })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }
}

// Everything a crawl task needs, shared through an Arc
pub(crate) struct Crawl<S> {
    config: CrawlConfig,
    ledger: Ledger,
    admission: Admission,
    barrier: Arc<JoinBarrier>,
    source: Arc<S>,
    cancel: CancellationToken,
}

// Crawls a website over HTTP and returns how often each page was linked
//
// Blocks (asynchronously) until every task has finished. Per-page errors
// are logged and never fail the crawl; only bad settings return Err.
pub async fn run_crawl(
    seed_url: &str,
    max_concurrency: usize,
    max_pages: usize,
) -> Result<PageCounts, CrawlError> {
    let config = CrawlConfig::new(seed_url, max_concurrency, max_pages)?;
    let source = HttpSource::new(DEFAULT_TIMEOUT)?;
    Ok(run_crawl_with(config, Arc::new(source), CancellationToken::new()).await)
}

// Crawls with an explicit page source and cancellation token
//
// Cancelling stops new pages from being fetched and abandons in-flight
// fetches; the pages recorded so far are still returned.
pub async fn run_crawl_with<S: PageSource>(
    config: CrawlConfig,
    source: Arc<S>,
    cancel: CancellationToken,
) -> PageCounts {
    info!(
        seed = %config.base_url(),
        max_pages = config.max_pages(),
        max_concurrency = config.max_concurrency(),
        "starting crawl"
    );

    let seed = config.base_url().to_string();
    let crawl = Arc::new(Crawl {
        ledger: Ledger::new(config.max_pages()),
        admission: Admission::new(config.max_concurrency()),
        barrier: JoinBarrier::new(),
        source,
        cancel,
        config,
    });

    task::spawn_task(&crawl, seed);
    crawl.barrier.wait().await;

    let counts = crawl.ledger.snapshot().await;
    let stats = CrawlStats::from_counts(&counts);
    info!(
        distinct_pages = stats.distinct_pages,
        total_references = stats.total_references,
        "crawl finished"
    );
    counts
}
