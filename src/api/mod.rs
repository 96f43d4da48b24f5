//! API module for the live overlay
//!
//! Serves the overlay page, a WebSocket feed of world snapshots and a REST
//! endpoint with the current snapshot.

pub mod http;
pub mod websocket;
pub mod world;

pub use http::create_router;
pub use websocket::AppState;
