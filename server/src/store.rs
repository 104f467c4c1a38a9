use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;
use shared::HousingLocationInfo;

/// Seed file layout, one collection per key as json-server expects it.
#[derive(Debug, Deserialize)]
pub(crate) struct SeedFile {
    pub locations: Vec<HousingLocationInfo>,
}

/// In-memory housing location collection, loaded once at startup and
/// read-only afterwards.
#[derive(Clone)]
pub struct Store {
    locations: Arc<Vec<HousingLocationInfo>>,
}

impl Store {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open seed file: {}", path.display()))?;
        let seed: SeedFile = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse seed file: {}", path.display()))?;
        Ok(Self::from_locations(seed.locations))
    }

    pub fn from_locations(locations: Vec<HousingLocationInfo>) -> Self {
        Self {
            locations: Arc::new(locations),
        }
    }

    pub fn list(&self) -> Vec<HousingLocationInfo> {
        self.locations.as_ref().clone()
    }

    pub fn get_by_id(&self, id: i64) -> Option<HousingLocationInfo> {
        self.locations.iter().find(|l| l.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: i64, city: &str) -> HousingLocationInfo {
        HousingLocationInfo {
            id,
            name: format!("Location {id}"),
            city: city.to_owned(),
            state: "IL".to_owned(),
            photo: "https://example.com/photo.jpg".to_owned(),
            available_units: 2,
            wifi: true,
            laundry: false,
        }
    }

    #[test]
    fn lists_all_locations() {
        let store = Store::from_locations(vec![location(0, "Chicago"), location(1, "Oakland")]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn finds_a_location_by_id() {
        let store = Store::from_locations(vec![location(0, "Chicago"), location(1, "Oakland")]);
        assert_eq!(store.get_by_id(1).map(|l| l.city), Some("Oakland".to_owned()));
        assert_eq!(store.get_by_id(42), None);
    }

    #[test]
    fn parses_a_json_server_seed() {
        let raw = r#"{
            "locations": [
                {
                    "id": 0,
                    "name": "Acme Fresh Start Housing",
                    "city": "Chicago",
                    "state": "IL",
                    "photo": "https://example.com/photo.jpg",
                    "availableUnits": 4,
                    "wifi": true,
                    "laundry": true
                }
            ]
        }"#;
        let seed: SeedFile = serde_json::from_str(raw).expect("seed should parse");
        assert_eq!(seed.locations.len(), 1);
        assert_eq!(seed.locations[0].available_units, 4);
    }
}
