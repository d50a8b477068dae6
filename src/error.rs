// src/error.rs
// =============================================================================
// The error types a crawl can run into.
//
// Every per-page failure (bad URL, normalization, fetch, link extraction)
// only ends the one crawl task that hit it. Those errors are logged, never
// returned to the driver. The only error run_crawl itself returns is
// InvalidConfig, raised before any task is spawned.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - Enums: one variant per failure kind, each carrying its context
// =============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrawlError {
    /// A URL (base, current or discovered) could not be parsed
    #[error("cannot parse URL '{url}': {reason}")]
    Parse { url: String, reason: String },

    /// A URL parsed but could not be turned into its canonical form
    #[error("cannot normalize URL '{url}': {reason}")]
    Normalize { url: String, reason: String },

    /// Network, status or content-type failure while fetching a page
    #[error("cannot fetch '{url}': {reason}")]
    Fetch { url: String, reason: String },

    /// The fetched content could not be scanned for links
    #[error("cannot extract links for '{url}': {reason}")]
    Extract { url: String, reason: String },

    /// The crawl was configured with values it cannot run with
    #[error("invalid crawl configuration: {0}")]
    InvalidConfig(String),
}

impl CrawlError {
    pub fn parse(url: &str, reason: impl ToString) -> Self {
        CrawlError::Parse { url: url.to_string(), reason: reason.to_string() }
    }

    pub fn normalize(url: &str, reason: impl ToString) -> Self {
        CrawlError::Normalize { url: url.to_string(), reason: reason.to_string() }
    }

    pub fn fetch(url: &str, reason: impl ToString) -> Self {
        CrawlError::Fetch { url: url.to_string(), reason: reason.to_string() }
    }

    pub fn extract(url: &str, reason: impl ToString) -> Self {
        CrawlError::Extract { url: url.to_string(), reason: reason.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_url_and_reason() {
        let err = CrawlError::fetch("https://x.test/a", "HTTP 404 Not Found");
        assert_eq!(err.to_string(), "cannot fetch 'https://x.test/a': HTTP 404 Not Found");
    }

    #[test]
    fn test_invalid_config_display() {
        let err = CrawlError::InvalidConfig("max_pages must be at least 1".to_string());
        assert!(err.to_string().contains("max_pages"));
    }
}
