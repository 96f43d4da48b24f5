//! Shared state for the overlay server

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;

use super::events::{OverlayEvent, WsMessage};
use crate::publisher::SnapshotPublisher;
use crate::types::WorldSnapshot;

/// Snapshots rarely change; a slow client that misses this many gets an
/// error frame and the next welcome on reconnect
const CHANNEL_CAPACITY: usize = 64;

/// Shared application state for HTTP and WebSocket handlers
pub struct AppState {
    /// Source of the current snapshot
    pub publisher: Arc<SnapshotPublisher>,

    /// Broadcast channel for sending snapshots to all connected clients
    pub event_tx: broadcast::Sender<WsMessage>,

    /// Monotonically increasing sequence counter
    pub sequence_counter: Arc<AtomicU64>,
}

impl AppState {
    /// Create state around `publisher` and forward its snapshots to
    /// WebSocket clients
    pub fn new(publisher: Arc<SnapshotPublisher>) -> Self {
        let (event_tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        let sequence_counter = Arc::new(AtomicU64::new(0));

        let tx = event_tx.clone();
        let counter = Arc::clone(&sequence_counter);
        publisher.subscribe(move |snapshot| {
            send_snapshot(&tx, &counter, snapshot.clone());
        });

        Self {
            publisher,
            event_tx,
            sequence_counter,
        }
    }

    /// Get the current sequence ID
    pub fn current_sequence_id(&self) -> u64 {
        self.sequence_counter.load(Ordering::SeqCst)
    }

    /// Subscribe to receive broadcast snapshots
    pub fn subscribe(&self) -> broadcast::Receiver<WsMessage> {
        self.event_tx.subscribe()
    }

    pub fn current_snapshot(&self) -> Option<WorldSnapshot> {
        self.publisher.current()
    }
}

fn send_snapshot(tx: &broadcast::Sender<WsMessage>, counter: &AtomicU64, snapshot: WorldSnapshot) {
    let seq = counter.fetch_add(1, Ordering::SeqCst);
    let msg = WsMessage {
        event: OverlayEvent::Snapshot { payload: snapshot },
        sequence_id: seq,
        timestamp: chrono::Utc::now().timestamp(),
    };

    // Ignore send errors - they just mean no overlay is connected
    let _ = tx.send(msg);
}
