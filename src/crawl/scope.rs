// src/crawl/scope.rs
// =============================================================================
// Decides whether a discovered URL belongs to the site being crawled.
//
// A URL is in scope when its hostname is exactly the seed's hostname.
// The scheme and port do not matter, and neither do subdomains: they are
// different hosts, so www.x.test is out of scope for x.test.
// =============================================================================

use url::Url;

use crate::error::CrawlError;

// Checks whether `candidate` is on the same host as `base`
//
// Returns Err(CrawlError::Parse) if either URL cannot be parsed; the
// caller treats that as out of scope and skips the URL.
pub fn is_same_host(base: &str, candidate: &str) -> Result<bool, CrawlError> {
    let base = Url::parse(base).map_err(|e| CrawlError::parse(base, e))?;
    let candidate_url = Url::parse(candidate).map_err(|e| CrawlError::parse(candidate, e))?;

    Ok(base.host_str() == candidate_url.host_str())
}
