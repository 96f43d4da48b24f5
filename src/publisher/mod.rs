//! Snapshot publisher
//!
//! Holds the latest [`WorldSnapshot`] and fans it out to subscribers.
//! A subscriber that joins late is immediately handed the current snapshot,
//! so an overlay that connects mid-session never shows stale state.
//!
//! Storing and notifying happen under one lock. Handlers therefore run
//! serialized and must not call back into the publisher.

use parking_lot::Mutex;

use crate::types::WorldSnapshot;

type Handler = Box<dyn Fn(&WorldSnapshot) + Send + Sync>;

#[derive(Default)]
struct Registry {
    current: Option<WorldSnapshot>,
    handlers: Vec<Handler>,
}

/// Latest-value multicast for world snapshots
#[derive(Default)]
pub struct SnapshotPublisher {
    registry: Mutex<Registry>,
}

impl SnapshotPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; it receives the current snapshot right away if
    /// one has been published
    pub fn subscribe<F>(&self, handler: F)
    where
        F: Fn(&WorldSnapshot) + Send + Sync + 'static,
    {
        let mut registry = self.registry.lock();
        if let Some(current) = &registry.current {
            handler(current);
        }
        registry.handlers.push(Box::new(handler));
    }

    /// Store `snapshot` as current and notify every handler in
    /// registration order
    pub fn publish(&self, snapshot: WorldSnapshot) {
        let mut registry = self.registry.lock();
        let registry = &mut *registry;
        let current = registry.current.insert(snapshot);
        for handler in &registry.handlers {
            handler(current);
        }
    }

    /// The last published snapshot
    pub fn current(&self) -> Option<WorldSnapshot> {
        self.registry.lock().current.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.lock().handlers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn world(id: &str) -> WorldSnapshot {
        WorldSnapshot {
            id: id.to_string(),
            name: format!("World {}", id),
            ..WorldSnapshot::default()
        }
    }

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&WorldSnapshot) + Send + Sync) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |s: &WorldSnapshot| sink.lock().push(s.id.clone()))
    }

    #[test]
    fn test_subscribe_before_publish_gets_no_replay() {
        let publisher = SnapshotPublisher::new();
        let (seen, handler) = recorder();
        publisher.subscribe(handler);
        assert!(seen.lock().is_empty());

        publisher.publish(world("A"));
        assert_eq!(*seen.lock(), vec!["A"]);
    }

    #[test]
    fn test_late_subscriber_gets_latest_only() {
        let publisher = SnapshotPublisher::new();
        publisher.publish(world("A"));
        publisher.publish(world("B"));
        publisher.publish(world("C"));

        let (seen, handler) = recorder();
        publisher.subscribe(handler);
        assert_eq!(*seen.lock(), vec!["C"]);

        publisher.publish(world("D"));
        assert_eq!(*seen.lock(), vec!["C", "D"]);
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let publisher = SnapshotPublisher::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            publisher.subscribe(move |_| order.lock().push(tag));
        }

        publisher.publish(world("A"));
        assert_eq!(*order.lock(), vec!["first", "second", "third"]);
        assert_eq!(publisher.subscriber_count(), 3);
    }

    #[test]
    fn test_cleared_snapshot_is_stored_and_replayed() {
        let publisher = SnapshotPublisher::new();
        publisher.publish(world("A"));
        publisher.publish(WorldSnapshot::cleared());
        assert_eq!(publisher.current(), Some(WorldSnapshot::cleared()));

        let (seen, handler) = recorder();
        publisher.subscribe(handler);
        assert_eq!(*seen.lock(), vec![""]);
    }

    #[test]
    fn test_concurrent_publishes_each_notify_once() {
        let publisher = Arc::new(SnapshotPublisher::new());
        let (seen, handler) = recorder();
        publisher.subscribe(handler);

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let publisher = Arc::clone(&publisher);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        publisher.publish(world(&format!("{}-{}", t, i)));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let seen = seen.lock();
        assert_eq!(seen.len(), 200);
        assert_eq!(publisher.current().unwrap().id, *seen.last().unwrap());
    }
}
