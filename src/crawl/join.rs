// src/crawl/join.rs
// =============================================================================
// Lets the driver wait until every crawl task, and every task those tasks
// spawned, has finished.
//
// Tasks keep spawning more tasks after the driver starts waiting, so
// joining a fixed list of handles is not enough. Instead we keep a counter
// of outstanding tasks:
// - enter() bumps it before a task is spawned and hands back a TaskGuard
// - dropping the TaskGuard decrements it, exactly once, on every exit path
// - wait() returns once the counter is back at zero
//
// A parent always enters its children before its own guard drops, so the
// counter cannot touch zero while work is still being handed out.
// =============================================================================

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

#[derive(Debug, Default)]
pub struct JoinBarrier {
    outstanding: AtomicUsize,
    idle: Notify,
}

// Proof that one task is counted as outstanding
#[derive(Debug)]
pub struct TaskGuard {
    barrier: Arc<JoinBarrier>,
}

impl JoinBarrier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn enter(self: &Arc<Self>) -> TaskGuard {
        self.outstanding.fetch_add(1, Ordering::AcqRel);
        TaskGuard { barrier: Arc::clone(self) }
    }

    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Acquire)
    }

    pub async fn wait(&self) {
        loop {
            // Register interest before checking, so a notify that lands
            // between the check and the await is not lost
            let notified = self.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.outstanding() == 0 {
                return;
            }
            notified.await;
        }
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        if self.barrier.outstanding.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.barrier.idle.notify_waiters();
        }
    }
}
