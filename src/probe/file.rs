//! File-backed location probe

use std::fs;
use std::path::PathBuf;

use super::{parse_location_value, LocationProbe};
use crate::types::LocationRecord;

/// Reads the raw location value from a file
pub struct FileProbe {
    path: PathBuf,
}

impl FileProbe {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LocationProbe for FileProbe {
    fn probe(&self) -> Option<LocationRecord> {
        match fs::read(&self.path) {
            Ok(raw) => parse_location_value(raw.trim_ascii_end()),
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "location file unreadable");
                None
            }
        }
    }
}
