// src/crawl/testing.rs
// =============================================================================
// An in-memory website for crawl tests. No network involved.
//
// Pages are keyed by their normalized URL. Every fetch is logged, and the
// peak number of fetches running at once is tracked so tests can check the
// admission limit.
// =============================================================================

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};

use crate::error::CrawlError;
use crate::page::PageSource;

#[derive(Debug, Default)]
pub struct FakeSite {
    pages: HashMap<String, String>,
    failing: HashSet<String>,
    latency: Duration,
    fetched: Mutex<Vec<String>>,
    running: AtomicUsize,
    peak: AtomicUsize,
}

impl FakeSite {
    pub fn new() -> Self {
        Self::default()
    }

    // Adds a page at `url` (already normalized) whose body links to `hrefs`
    pub fn page(mut self, url: &str, hrefs: &[&str]) -> Self {
        let body: String = hrefs.iter().map(|href| format!("<a href=\"{}\">link</a>\n", href)).collect();
        self.pages.insert(url.to_string(), format!("<html><body>{}</body></html>", body));
        self
    }

    pub fn failing(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

impl PageSource for FakeSite {
    fn fetch_content<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, CrawlError>> {
        async move {
            self.fetched.lock().unwrap().push(url.to_string());
            let now = self.running.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);

            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            } else {
                tokio::task::yield_now().await;
            }
            self.running.fetch_sub(1, Ordering::SeqCst);

            if self.failing.contains(url) {
                return Err(CrawlError::fetch(url, "HTTP 500 Internal Server Error"));
            }
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| CrawlError::fetch(url, "HTTP 404 Not Found"))
        }
        .boxed()
    }
}

// Builds a site of `n` pages where every page links to every other one
pub fn fully_connected(n: usize) -> FakeSite {
    let urls: Vec<String> = (0..n).map(|i| format!("https://x.test/p{}", i)).collect();
    let hrefs: Vec<&str> = urls.iter().map(String::as_str).collect();

    let mut site = FakeSite::new().page("https://x.test", &hrefs);
    for url in &urls {
        site = site.page(url, &hrefs);
    }
    site
}
