//! Data types for the world overlay
//!
//! This module contains the records that flow from the location probe,
//! through the metadata fetcher, to the snapshot publisher.

mod error;
mod location;
mod snapshot;

pub use error::{ConfigError, FetchError};
pub use location::LocationRecord;
pub use snapshot::WorldSnapshot;

/// Result type for process-level operations
pub type OverlayResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
