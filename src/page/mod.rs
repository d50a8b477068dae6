// src/page/mod.rs
// =============================================================================
// This module holds everything the crawler needs to know about a page
// without being part of the crawl itself:
// - fetch: download a page's HTML over HTTP
// - html: pull the links out of that HTML
// - normalize: turn a URL into its canonical ledger key
//
// The crawler talks to these through the PageSource trait, so tests can
// swap the network for an in-memory site.
//
// Rust concepts:
// - Traits: an interface the crawl engine is generic over
// - BoxFuture: lets a trait method return an async result
// =============================================================================

mod fetch;
mod html;
mod normalize;

use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;

use crate::error::CrawlError;

pub use html::extract_html_links;
pub use normalize::normalize_url;

// Where crawl tasks get page content from
//
// Only fetching has to be provided. Link extraction and normalization
// default to the HTML and URL rules in this module.
pub trait PageSource: Send + Sync + 'static {
    /// Retrieves the raw HTML of a page
    fn fetch_content<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, CrawlError>>;

    /// Returns the absolute links in `html`, resolved against `base_url`
    fn extract_links(&self, html: &str, base_url: &str) -> Result<Vec<String>, CrawlError> {
        extract_html_links(html, base_url)
    }

    /// Returns the canonical form of `raw`
    fn normalize(&self, raw: &str) -> Result<String, CrawlError> {
        normalize_url(raw)
    }
}

// The real page source: pages come from the web
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> Result<Self, CrawlError> {
        Ok(Self { client: fetch::build_client(timeout)? })
    }
}

impl PageSource for HttpSource {
    fn fetch_content<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, CrawlError>> {
        fetch::fetch_page(&self.client, url).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Static;

    impl PageSource for Static {
        fn fetch_content<'a>(&'a self, _url: &'a str) -> BoxFuture<'a, Result<String, CrawlError>> {
            async { Ok("<a href='/a'>a</a>".to_string()) }.boxed()
        }
    }

    #[tokio::test]
    async fn test_default_methods_use_html_and_url_rules() {
        let source = Static;
        let html = source.fetch_content("https://x.test").await.unwrap();
        let links = source.extract_links(&html, "https://x.test").unwrap();
        assert_eq!(links, vec!["https://x.test/a"]);
        assert_eq!(source.normalize("https://X.test/a/").unwrap(), "https://x.test/a");
    }

    #[test]
    fn test_http_source_builds() {
        assert!(HttpSource::new(Duration::from_secs(5)).is_ok());
    }
}
