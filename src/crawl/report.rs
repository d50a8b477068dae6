// src/crawl/report.rs
// =============================================================================
// Turns the finished ledger into an ordered report.
//
// Order: most-linked pages first; pages with the same count are sorted by
// URL so the output is identical every time for the same ledger.
// =============================================================================

use std::fmt;

use serde::Serialize;

use super::PageCounts;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub url: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub base_url: String,
    pub pages: Vec<ReportEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrawlStats {
    pub distinct_pages: usize,
    pub total_references: usize,
}

impl CrawlStats {
    pub fn from_counts(counts: &PageCounts) -> Self {
        Self {
            distinct_pages: counts.len(),
            total_references: counts.values().sum(),
        }
    }
}

pub fn render_report(counts: &PageCounts, base_url: &str) -> Report {
    let mut pages: Vec<ReportEntry> = counts
        .iter()
        .map(|(url, count)| ReportEntry { url: url.clone(), count: *count })
        .collect();

    // Keys are unique, so this is a total order and sort_unstable is fine
    pages.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.url.cmp(&b.url)));

    Report { base_url: base_url.to_string(), pages }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=============================")?;
        writeln!(f, "REPORT for {}", self.base_url)?;
        writeln!(f, "=============================")?;
        for entry in &self.pages {
            writeln!(f, "Found {} internal links to {}", entry.count, entry.url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[(&str, usize)]) -> PageCounts {
        entries.iter().map(|(url, count)| (url.to_string(), *count)).collect()
    }

    #[test]
    fn test_orders_by_count_then_url() {
        let ledger = counts(&[
            ("https://x.test/b", 1),
            ("https://x.test/c", 3),
            ("https://x.test/a", 1),
            ("https://x.test", 3),
        ]);
        let report = render_report(&ledger, "https://x.test/");
        let order: Vec<&str> = report.pages.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(
            order,
            vec!["https://x.test", "https://x.test/c", "https://x.test/a", "https://x.test/b"]
        );
    }

    #[test]
    fn test_is_deterministic() {
        let ledger = counts(&[("https://x.test/q", 2), ("https://x.test/p", 2), ("https://x.test/r", 5)]);
        assert_eq!(render_report(&ledger, "https://x.test"), render_report(&ledger, "https://x.test"));
    }

    #[test]
    fn test_nothing_omitted() {
        let ledger = counts(&[("https://x.test/a", 1), ("https://x.test/b", 1)]);
        let report = render_report(&ledger, "https://x.test");
        assert_eq!(report.pages.len(), 2);
    }

    #[test]
    fn test_text_format() {
        let ledger = counts(&[("https://x.test/a", 2)]);
        let text = render_report(&ledger, "https://x.test").to_string();
        assert_eq!(
            text,
            "=============================\n\
             REPORT for https://x.test\n\
             =============================\n\
             Found 2 internal links to https://x.test/a\n"
        );
    }

    #[test]
    fn test_json_format() {
        let ledger = counts(&[("https://x.test/a", 2)]);
        let json = serde_json::to_value(render_report(&ledger, "https://x.test")).unwrap();
        assert_eq!(json["base_url"], "https://x.test");
        assert_eq!(json["pages"][0]["url"], "https://x.test/a");
        assert_eq!(json["pages"][0]["count"], 2);
    }

    #[test]
    fn test_stats() {
        let ledger = counts(&[("https://x.test/a", 2), ("https://x.test/b", 3)]);
        let stats = CrawlStats::from_counts(&ledger);
        assert_eq!(stats, CrawlStats { distinct_pages: 2, total_references: 5 });
    }

    #[test]
    fn test_empty_ledger() {
        let report = render_report(&PageCounts::new(), "https://x.test");
        assert!(report.pages.is_empty());
    }
}
