//! Single-slot guard for in-flight world fetches
//!
//! Clones share one permit, so any holder of a handle can see (or hold off)
//! the poller's fetch.

use std::sync::Arc;

use tokio::sync::{Semaphore, SemaphorePermit};

/// Allows at most one fetch in flight across all clones
#[derive(Clone)]
pub struct FetchSlot {
    permits: Arc<Semaphore>,
}

impl FetchSlot {
    pub fn new() -> Self {
        Self {
            permits: Arc::new(Semaphore::new(1)),
        }
    }

    /// Claim the slot; `None` while another fetch holds it
    pub fn try_begin(&self) -> Option<SemaphorePermit<'_>> {
        self.permits.try_acquire().ok()
    }

    pub fn is_busy(&self) -> bool {
        self.permits.available_permits() == 0
    }
}

impl Default for FetchSlot {
    fn default() -> Self {
        Self::new()
    }
}
