// src/crawl/task.rs
// =============================================================================
// One crawl task: everything that happens to a single candidate URL.
//
// In order:
// 1. bail out early if the ledger is already full
// 2. skip URLs on other hosts
// 3. normalize and register the visit in the ledger
//    (only the first visit to a page goes any further)
// 4. take an admission token, fetch the page and extract its links
// 5. spawn one child task per link
//
// Every task is counted by the join barrier from before it is spawned
// until its TaskGuard drops, whichever way the task ends.
// =============================================================================

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::ledger::Visit;
use super::scope::is_same_host;
use super::Crawl;
use crate::error::CrawlError;
use crate::page::PageSource;

// How a crawl task ended
#[derive(Debug)]
pub enum TaskOutcome {
    OutOfScope,
    AlreadyVisited,
    CapReached,
    Cancelled,
    Failed(CrawlError),
    /// The page was fetched and this many children were spawned
    FannedOut(usize),
}

// Counts a new task in the join barrier and runs it in the background
pub(crate) fn spawn_task<S: PageSource>(crawl: &Arc<Crawl<S>>, raw_url: String) {
    let guard = crawl.barrier.enter();
    let crawl = Arc::clone(crawl);

    tokio::spawn(async move {
        let _guard = guard;
        let outcome = crawl_page(&crawl, &raw_url).await;
        match outcome {
            TaskOutcome::Failed(e) => warn!(url = %raw_url, "{}", e),
            TaskOutcome::FannedOut(children) => debug!(url = %raw_url, children, "page crawled"),
            outcome => debug!(url = %raw_url, ?outcome, "task finished"),
        }
    });
}

pub(crate) async fn crawl_page<S: PageSource>(crawl: &Arc<Crawl<S>>, raw_url: &str) -> TaskOutcome {
    if crawl.cancel.is_cancelled() {
        return TaskOutcome::Cancelled;
    }

    if crawl.ledger.is_full().await {
        return TaskOutcome::CapReached;
    }

    match is_same_host(crawl.config.base_url().as_str(), raw_url) {
        Ok(true) => {}
        Ok(false) => return TaskOutcome::OutOfScope,
        Err(e) => return TaskOutcome::Failed(e),
    }

    let normalized = match crawl.source.normalize(raw_url) {
        Ok(normalized) => normalized,
        Err(e) => return TaskOutcome::Failed(e),
    };

    match crawl.ledger.record_visit(&normalized).await {
        Visit::First { distinct_pages } => {
            info!("Crawling [{}/{}]: {}", distinct_pages, crawl.ledger.max_pages(), normalized);
        }
        Visit::Repeat => return TaskOutcome::AlreadyVisited,
        Visit::CapReached => return TaskOutcome::CapReached,
    }

    let base_url = crawl.config.base_url();
    let source = &crawl.source;
    let cancel = &crawl.cancel;
    let admission = &crawl.admission;
    let page_url = normalized.as_str();

    // None: cancelled mid-fetch, or the gate was closed before a token came free
    let fetched = crawl
        .admission
        .with_token(move || async move {
            debug!(in_flight = admission.in_use(), "fetching {}", page_url);
            let html = tokio::select! {
                _ = cancel.cancelled() => return None,
                result = source.fetch_content(page_url) => result,
            };
            Some(html.and_then(|html| source.extract_links(&html, base_url.as_str())))
        })
        .await
        .flatten();

    let links = match fetched {
        None => return TaskOutcome::Cancelled,
        Some(Err(e)) => return TaskOutcome::Failed(e),
        Some(Ok(links)) => links,
    };

    let mut spawned = 0;
    for link in links {
        // Links normally arrive absolute; join also copes with relative ones
        let next = match base_url.join(&link) {
            Ok(next) => next,
            Err(e) => {
                warn!("{}", CrawlError::parse(&link, e));
                continue;
            }
        };
        spawn_task(crawl, next.to_string());
        spawned += 1;
    }

    TaskOutcome::FannedOut(spawned)
}
