//! Registry-backed location probe (Windows)

use winreg::enums::HKEY_CURRENT_USER;
use winreg::RegKey;

use super::{parse_location_value, LocationProbe};
use crate::types::LocationRecord;

const SUBKEY: &str = r"SOFTWARE\VRChat\VRChat";
const VALUE_NAME: &str = "LocationContext_World_h2703649242";

/// Reads the location value the client stores under HKCU
#[derive(Default)]
pub struct RegistryProbe;

impl RegistryProbe {
    pub fn new() -> Self {
        Self
    }
}

impl LocationProbe for RegistryProbe {
    fn probe(&self) -> Option<LocationRecord> {
        let key = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey(SUBKEY)
            .map_err(|e| tracing::debug!(error = %e, "registry key unavailable"))
            .ok()?;
        let value = key
            .get_raw_value(VALUE_NAME)
            .map_err(|e| tracing::debug!(error = %e, "location value unavailable"))
            .ok()?;
        parse_location_value(&value.bytes)
    }
}
