//! WebSocket message types for the overlay feed

use serde::{Deserialize, Serialize};

use crate::types::WorldSnapshot;

/// Events pushed to overlay clients
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OverlayEvent {
    /// The world changed (an empty `id` clears the overlay)
    Snapshot {
        #[serde(flatten)]
        payload: WorldSnapshot,
    },
}

/// WebSocket message wrapper with metadata
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WsMessage {
    #[serde(flatten)]
    pub event: OverlayEvent,

    /// Monotonically increasing sequence ID for gap detection
    pub sequence_id: u64,

    /// Unix timestamp when the event was created
    pub timestamp: i64,
}

/// Client message types
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Heartbeat
    Ping,
}

/// Welcome message sent on connection, carrying the current snapshot so a
/// freshly loaded overlay renders without waiting for the next change
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WelcomeMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub current_sequence_id: u64,
    pub snapshot: Option<WorldSnapshot>,
}

impl WelcomeMessage {
    pub fn new(current_sequence_id: u64, snapshot: Option<WorldSnapshot>) -> Self {
        Self {
            msg_type: "connected".to_string(),
            current_sequence_id,
            snapshot,
        }
    }
}

/// Pong response message
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PongMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
}

impl Default for PongMessage {
    fn default() -> Self {
        Self {
            msg_type: "pong".to_string(),
        }
    }
}
