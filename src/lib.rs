//! World Overlay
//!
//! Watches which VRChat world the local client is in, looks up the world's
//! name, author and thumbnail on its public page, and pushes the result to a
//! browser overlay (e.g. an OBS browser source).
//!
//! # Modules
//!
//! - `types`: Location records, world snapshots and errors
//! - `probe`: Reads the client's persisted location
//! - `metadata`: Fetches and parses world pages
//! - `poller`: Probe → fetch → publish loop with deduplication
//! - `publisher`: Latest-value multicast with replay for late subscribers
//! - `api`: Overlay page, WebSocket feed and REST endpoint
//! - `config`: Environment configuration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use world_overlay::{HttpWorldFetcher, Poller, SnapshotPublisher};
//! use world_overlay::probe::FileProbe;
//!
//! #[tokio::main]
//! async fn main() {
//!     let publisher = Arc::new(SnapshotPublisher::new());
//!     publisher.subscribe(|snapshot| println!("{} {}", snapshot.name, snapshot.author_name));
//!
//!     let fetcher = HttpWorldFetcher::new().unwrap();
//!     Poller::new(FileProbe::new("location.txt"), fetcher, publisher).run().await;
//! }
//! ```

pub mod api;
pub mod config;
pub mod metadata;
pub mod poller;
pub mod probe;
pub mod publisher;
pub mod types;

// Re-export commonly used items at crate root
pub use config::OverlayConfig;
pub use metadata::{HttpWorldFetcher, WorldFetcher};
pub use poller::{PollOutcome, Poller};
pub use probe::LocationProbe;
pub use publisher::SnapshotPublisher;
pub use types::{FetchError, LocationRecord, OverlayResult, WorldSnapshot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
