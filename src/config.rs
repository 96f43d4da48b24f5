//! Runtime configuration
//!
//! Environment:
//! - OVERLAY_BIND: address the overlay HTTP server listens on (default 127.0.0.1:5000)
//! - OVERLAY_LOCATION_FILE: read the location value from this file instead of
//!   the platform default
//!
//! The poll interval and the world page URL are fixed; see
//! [`crate::poller::POLL_INTERVAL`] and [`crate::metadata::WORLD_PAGE_URL`].

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::types::ConfigError;

/// Default listen address for the overlay server
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Location file used on hosts without a registry
pub const DEFAULT_LOCATION_FILE: &str = "location.txt";

#[derive(Debug, Clone)]
pub struct OverlayConfig {
    pub bind: SocketAddr,
    pub location_file: Option<PathBuf>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            location_file: None,
        }
    }
}

impl OverlayConfig {
    /// Load configuration from process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(bind) = lookup("OVERLAY_BIND").filter(|v| !v.trim().is_empty()) {
            config.bind = bind
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "OVERLAY_BIND",
                    value: bind.clone(),
                })?;
        }

        if let Some(path) = lookup("OVERLAY_LOCATION_FILE").filter(|v| !v.trim().is_empty()) {
            config.location_file = Some(PathBuf::from(path));
        }

        Ok(config)
    }
}
