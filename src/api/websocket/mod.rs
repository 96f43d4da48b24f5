//! WebSocket module for the live overlay
//!
//! Provides the `/ws` endpoint. A client receives a welcome message holding
//! the current snapshot, then every snapshot the poller publishes.

pub mod events;
pub mod handler;
pub mod state;

pub use state::AppState;
