//! Poll loop - watches the location probe and publishes world snapshots
//!
//! Every [`POLL_INTERVAL`] the poller reads the probe and compares the world
//! id with the last one it published:
//!
//! - no world, nothing shown: nothing happens
//! - no world, a world shown: publish the cleared snapshot
//! - same id: nothing happens (no fetch, no publish)
//! - new id: fetch metadata and publish the full snapshot, or a partial one
//!   built from the location record if the fetch fails
//!
//! The fetch is awaited inside the step, so the next probe waits for it.

mod slot;

pub use slot::FetchSlot;

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;

use crate::metadata::WorldFetcher;
use crate::probe::LocationProbe;
use crate::publisher::SnapshotPublisher;
use crate::types::WorldSnapshot;

/// Delay between probe reads
pub const POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// What a single poll step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// No world and nothing shown
    Idle,
    /// World left; cleared snapshot published
    Cleared,
    /// Same world as last published
    Unchanged,
    /// Another holder of the fetch slot was busy; retried next step
    Busy,
    /// Fetch failed; partial snapshot published
    Partial,
    /// Full snapshot published
    Updated,
}

/// Owns the deduplication state and drives probe → fetch → publish
pub struct Poller<P, F> {
    probe: P,
    fetcher: F,
    publisher: Arc<SnapshotPublisher>,
    current: Option<WorldSnapshot>,
    slot: FetchSlot,
    interval: Duration,
}

impl<P, F> Poller<P, F>
where
    P: LocationProbe,
    F: WorldFetcher,
{
    pub fn new(probe: P, fetcher: F, publisher: Arc<SnapshotPublisher>) -> Self {
        Self {
            probe,
            fetcher,
            publisher,
            current: None,
            slot: FetchSlot::new(),
            interval: POLL_INTERVAL,
        }
    }

    /// Override the delay between steps
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Handle to the fetch slot. Holding it pauses world fetches; the
    /// poller reports [`PollOutcome::Busy`] and retries on the next step.
    pub fn fetch_slot(&self) -> FetchSlot {
        self.slot.clone()
    }

    /// The last snapshot this poller published
    pub fn current(&self) -> Option<&WorldSnapshot> {
        self.current.as_ref()
    }

    /// Run one probe/compare/publish step
    pub async fn poll_once(&mut self) -> PollOutcome {
        // An empty id carries no session
        let Some(record) = self.probe.probe().filter(|r| !r.id.is_empty()) else {
            if self.current.as_ref().is_some_and(WorldSnapshot::is_present) {
                tracing::info!("no world found, clearing current world info");
                self.set_current(WorldSnapshot::cleared());
                return PollOutcome::Cleared;
            }
            return PollOutcome::Idle;
        };

        if self.current.as_ref().is_some_and(|c| c.id == record.id) {
            return PollOutcome::Unchanged;
        }

        tracing::info!(world_id = %record.id, world_name = %record.name, "found new world");

        let fetched = match self.slot.try_begin() {
            Some(_permit) => self.fetcher.fetch(&record.id).await,
            None => {
                tracing::warn!(world_id = %record.id, "world fetch already in flight");
                return PollOutcome::Busy;
            }
        };

        match fetched {
            Some(snapshot) => {
                tracing::info!(
                    world_id = %snapshot.id,
                    world_name = %snapshot.name,
                    author_name = %snapshot.author_name,
                    "world info updated"
                );
                self.set_current(snapshot);
                PollOutcome::Updated
            }
            None => {
                tracing::warn!(
                    world_id = %record.id,
                    world_name = %record.name,
                    "failed to get world info, showing location name only"
                );
                self.set_current(WorldSnapshot::partial(&record));
                PollOutcome::Partial
            }
        }
    }

    /// Poll forever. A panicking step is logged and the loop carries on.
    pub async fn run(mut self) {
        tracing::info!(interval_ms = self.interval.as_millis() as u64, "world poller started");
        loop {
            if let Err(panic) = AssertUnwindSafe(self.poll_once()).catch_unwind().await {
                tracing::error!(reason = %panic_message(&*panic), "poll step panicked");
            }
            tokio::time::sleep(self.interval).await;
        }
    }

    fn set_current(&mut self, snapshot: WorldSnapshot) {
        self.current = Some(snapshot.clone());
        self.publisher.publish(snapshot);
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
