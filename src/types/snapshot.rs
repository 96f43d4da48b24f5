//! World snapshot - the unit published to the overlay

use serde::{Deserialize, Serialize};

use super::LocationRecord;

/// Everything the overlay knows about the current world.
///
/// An empty `id` is the cleared snapshot: the client is not in a world.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub id: String,
    pub name: String,
    #[serde(rename = "authorName")]
    pub author_name: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl WorldSnapshot {
    /// Snapshot used to clear the overlay
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Snapshot carrying only what the location record knows (fetch failed)
    pub fn partial(record: &LocationRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            author_name: String::new(),
            image_url: String::new(),
        }
    }

    /// True when this snapshot describes an active world
    pub fn is_present(&self) -> bool {
        !self.id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleared_is_absent() {
        let snapshot = WorldSnapshot::cleared();
        assert!(!snapshot.is_present());
        assert_eq!(snapshot.name, "");
        assert_eq!(snapshot.author_name, "");
        assert_eq!(snapshot.image_url, "");
    }

    #[test]
    fn test_partial_keeps_record_fields() {
        let record = LocationRecord::new("wrld_abc", "X");
        let snapshot = WorldSnapshot::partial(&record);
        assert!(snapshot.is_present());
        assert_eq!(snapshot.id, "wrld_abc");
        assert_eq!(snapshot.name, "X");
        assert_eq!(snapshot.author_name, "");
        assert_eq!(snapshot.image_url, "");
    }

    #[test]
    fn test_serializes_with_overlay_field_names() {
        let snapshot = WorldSnapshot {
            id: "wrld_1".to_string(),
            name: "Club".to_string(),
            author_name: "by Jane".to_string(),
            image_url: "https://img".to_string(),
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"authorName\":\"by Jane\""));
        assert!(json.contains("\"imageUrl\":\"https://img\""));
    }
}
