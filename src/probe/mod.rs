//! Location probe - reads the world the local client is in
//!
//! The client persists its location as a raw `<id>|<name>` value. A probe
//! returns `None` whenever that value is missing or malformed: not being in a
//! world is the normal idle state, never an error.

mod file;
#[cfg(windows)]
mod registry;

pub use file::FileProbe;
#[cfg(windows)]
pub use registry::RegistryProbe;

use crate::config::OverlayConfig;
use crate::types::LocationRecord;

/// Source of the current location record
pub trait LocationProbe: Send + Sync {
    /// Read the current location, or `None` when there is no active world
    fn probe(&self) -> Option<LocationRecord>;
}

impl<T: LocationProbe + ?Sized> LocationProbe for Box<T> {
    fn probe(&self) -> Option<LocationRecord> {
        (**self).probe()
    }
}

/// Parse a raw `<id>|<name>` value.
///
/// The bytes are read as ASCII; each non-ASCII byte becomes `?`. Trailing NULs
/// from binary registry values are dropped. The split happens at the first
/// `|`, so the name may itself contain `|`.
pub fn parse_location_value(raw: &[u8]) -> Option<LocationRecord> {
    let text: String = raw
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect();
    let text = text.trim_end_matches('\0');

    let (id, name) = text.split_once('|')?;
    Some(LocationRecord::new(id, name))
}

/// Pick the probe backend for this host
pub fn default_probe(config: &OverlayConfig) -> Box<dyn LocationProbe> {
    if let Some(path) = &config.location_file {
        return Box::new(FileProbe::new(path.clone()));
    }

    platform_probe()
}

#[cfg(windows)]
fn platform_probe() -> Box<dyn LocationProbe> {
    Box::new(RegistryProbe::new())
}

#[cfg(not(windows))]
fn platform_probe() -> Box<dyn LocationProbe> {
    Box::new(FileProbe::new(crate::config::DEFAULT_LOCATION_FILE))
}
