// src/crawl/admission.rs
// =============================================================================
// Limits how many fetch-and-extract operations run at the same time.
//
// Spawning crawl tasks is unbounded. Only the expensive part (downloading
// and parsing a page) has to hold a token. Tokens are tokio semaphore
// permits: the permit is dropped when the guarded future finishes, returns
// early or fails, so a token can never leak.
// =============================================================================

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;

#[derive(Debug, Clone)]
pub struct Admission {
    permits: Arc<Semaphore>,
    capacity: usize,
}

impl Admission {
    pub fn new(capacity: usize) -> Self {
        Self { permits: Arc::new(Semaphore::new(capacity)), capacity }
    }

    // Tokens currently handed out
    pub fn in_use(&self) -> usize {
        self.capacity - self.permits.available_permits()
    }

    // Waits for a token, runs `f`, then gives the token back
    //
    // Returns None without running `f` if the gate has been closed.
    pub async fn with_token<F, Fut, T>(&self, f: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let _permit = self.permits.acquire().await.ok()?;
        Some(f().await)
    }
}
