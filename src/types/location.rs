//! Location record read from the game's persisted state

use serde::{Deserialize, Serialize};

/// The world the local client currently reports, as `<id>|<name>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: String,
    pub name: String,
}

impl LocationRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
