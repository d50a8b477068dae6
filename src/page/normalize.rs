// src/page/normalize.rs
// =============================================================================
// Turns a raw URL into the canonical string we use as a ledger key.
//
// Two links to the same page should count as the same page, even when
// they are spelled differently:
//   https://X.test/blog/   -> https://x.test/blog
//   https://x.test:443/    -> https://x.test
//   https://x.test/a#intro -> https://x.test/a
//
// The result is still an absolute URL, so the crawler can fetch it directly.
// Normalizing an already-normalized URL gives the same string back.
// =============================================================================

use url::Url;

use crate::error::CrawlError;

// Canonicalizes a URL
//
// The url crate already lowercases the scheme and host and drops default
// ports while parsing. On top of that we:
// - drop the fragment (#section) and any user:password@ credentials
// - strip the trailing slash from the path (the root path becomes empty)
// - keep the query string, it can select a different page
pub fn normalize_url(raw: &str) -> Result<String, CrawlError> {
    let parsed = Url::parse(raw.trim()).map_err(|e| CrawlError::normalize(raw, e))?;

    if parsed.cannot_be_a_base() {
        return Err(CrawlError::normalize(raw, "URL has no hierarchical path"));
    }

    let host = parsed
        .host_str()
        .ok_or_else(|| CrawlError::normalize(raw, "URL has no host"))?;

    let mut normalized = format!("{}://{}", parsed.scheme(), host);
    if let Some(port) = parsed.port() {
        normalized.push(':');
        normalized.push_str(&port.to_string());
    }

    normalized.push_str(parsed.path().trim_end_matches('/'));

    if let Some(query) = parsed.query() {
        normalized.push('?');
        normalized.push_str(query);
    }

    Ok(normalized)
}
