// src/lib.rs
// =============================================================================
// link-tally crawls one website and counts how often each of its pages is
// linked to from the others.
//
// Modules:
// - crawl: the concurrent crawl engine and the report
// - page: fetching, link extraction and URL normalization
// - error: the error types shared by both
// =============================================================================

pub mod crawl;
pub mod error;
pub mod page;

pub use crawl::{
    render_report, run_crawl, run_crawl_with, CrawlConfig, CrawlStats, PageCounts, Report,
    ReportEntry,
};
pub use error::CrawlError;
