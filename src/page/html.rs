// src/page/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Every link is resolved against the crawl's base URL, so the crawler
// only ever sees absolute http(s) URLs.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

use crate::error::CrawlError;

// Extracts all links from HTML content
//
// Parameters:
//   html: the HTML content to parse
//   base_url: the URL relative links are resolved against
//
// Returns: absolute http(s) URLs in document order, duplicates included.
// Every duplicate is another reference to the page, and the ledger counts
// references.
//
// Example:
//   html = "<a href='/docs'>Docs</a>"
//   base_url = "https://example.com"
//   result = ["https://example.com/docs"]
pub fn extract_html_links(html: &str, base_url: &str) -> Result<Vec<String>, CrawlError> {
    let base = Url::parse(base_url).map_err(|e| CrawlError::extract(base_url, e))?;

    let selector = Selector::parse("a[href]")
        .map_err(|e| CrawlError::extract(base_url, format!("bad selector: {:?}", e)))?;

    let document = Html::parse_document(html);

    let links = document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_url(&base, href))
        .filter(|url| is_crawlable_link(url))
        .collect();

    Ok(links)
}

// Resolves a possibly-relative href to an absolute URL
//
// Anchors and special protocols never point at another page, so they
// are skipped here rather than showing up as parse failures later.
fn resolve_url(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    // join handles both absolute hrefs and relative ones
    base.join(href).ok().map(|url| url.to_string())
}

fn is_crawlable_link(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
