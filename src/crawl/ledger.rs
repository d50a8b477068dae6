// src/crawl/ledger.rs
// =============================================================================
// The shared record of every page the crawl has seen and how many times
// it was linked to.
//
// All crawl tasks share one Ledger. The page cap lives here too: deciding
// "is there room for one more page?" and inserting that page happen under
// a single lock, so two tasks can never both see the last free slot.
// =============================================================================

use std::collections::HashMap;

use tokio::sync::Mutex;

// The outcome of registering one visit to a normalized URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// The page is new. The caller now owns fetching it.
    First { distinct_pages: usize },
    /// Seen before, its count was incremented
    Repeat,
    /// The page is new but the ledger is full, nothing was recorded
    CapReached,
}

#[derive(Debug)]
pub struct Ledger {
    pages: Mutex<HashMap<String, usize>>,
    max_pages: usize,
}

impl Ledger {
    pub fn new(max_pages: usize) -> Self {
        Self { pages: Mutex::new(HashMap::new()), max_pages }
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    // Records one reference to `normalized`
    //
    // Existing keys always get their count bumped, even once the cap is
    // reached. A new key is only inserted while there is room. Crawl tasks
    // normally stop at the is_full check first, so a repeat only lands here
    // after the cap when it raced past that check.
    pub async fn record_visit(&self, normalized: &str) -> Visit {
        let mut pages = self.pages.lock().await;

        if let Some(count) = pages.get_mut(normalized) {
            *count += 1;
            return Visit::Repeat;
        }

        if pages.len() >= self.max_pages {
            return Visit::CapReached;
        }

        pages.insert(normalized.to_string(), 1);
        Visit::First { distinct_pages: pages.len() }
    }

    // Fast early-exit check taken before any network work
    //
    // Not authoritative: record_visit re-checks under the same lock as
    // the insert.
    pub async fn is_full(&self) -> bool {
        self.pages.lock().await.len() >= self.max_pages
    }

    // Copies the whole ledger out
    //
    // Only meaningful once the join barrier has drained. Before that,
    // tasks may still be adding to it.
    pub async fn snapshot(&self) -> HashMap<String, usize> {
        self.pages.lock().await.clone()
    }
}
