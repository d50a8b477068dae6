// src/page/fetch.rs
// =============================================================================
// Downloads page HTML over HTTP.
//
// Any failure (network error, timeout, non-2xx status, a response that is
// not HTML) becomes a CrawlError::Fetch. The crawler logs it and moves on.
// =============================================================================

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::error::CrawlError;

pub const USER_AGENT: &str = concat!("link-tally/", env!("CARGO_PKG_VERSION"));

// Builds the shared HTTP client
//
// Client is cheap to clone (it's a reference counter internally), so one
// client serves every crawl task and keeps its connection pool warm.
pub fn build_client(timeout: Duration) -> Result<Client, CrawlError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| CrawlError::InvalidConfig(format!("cannot build HTTP client: {}", e)))
}

// Fetches a web page and returns its HTML content
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, CrawlError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| CrawlError::fetch(url, describe_error(&e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CrawlError::fetch(url, format!("HTTP {}", status)));
    }

    // A missing header is given the benefit of the doubt
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_ascii_lowercase());
    if let Some(content_type) = content_type {
        if !is_html(&content_type) {
            return Err(CrawlError::fetch(url, format!("not HTML: {}", content_type)));
        }
    }

    response
        .text()
        .await
        .map_err(|e| CrawlError::fetch(url, describe_error(&e)))
}

fn is_html(content_type: &str) -> bool {
    content_type.starts_with("text/html") || content_type.starts_with("application/xhtml+xml")
}

// Gives reqwest errors a short, readable reason
fn describe_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_html() {
        assert!(is_html("text/html"));
        assert!(is_html("text/html; charset=utf-8"));
        assert!(is_html("application/xhtml+xml"));
        assert!(!is_html("application/pdf"));
        assert!(!is_html("image/png"));
    }

    #[test]
    fn test_user_agent_names_the_tool() {
        assert!(USER_AGENT.starts_with("link-tally/"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        let client = build_client(Duration::from_secs(2)).unwrap();
        // Port 9 on localhost: nothing listens there, the connection is refused
        let result = fetch_page(&client, "http://127.0.0.1:9/").await;
        assert!(matches!(result, Err(CrawlError::Fetch { .. })));
    }
}
