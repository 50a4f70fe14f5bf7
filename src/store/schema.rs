//! On-disk document layout, version 1.
//!
//! ```text
//! { "version": 1, "saved_at": <RFC 3339>, "maps": [
//!     { "title": ..., "places": [
//!         { "title": ..., "description": ..., "latitude": ..., "longitude": ... } ] } ] }
//! ```
//!
//! Records mirror the model field for field but carry no invariants; they
//! are checked when converted back into [`UserMap`]s.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{LatLng, Place, UserMap, ValidationError};

/// Format version written by this build.
pub const CURRENT_VERSION: u32 = 1;

/// Just enough of a document to decide how to decode the rest.
#[derive(Debug, Deserialize)]
pub struct VersionProbe {
    pub version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CollectionDocument {
    pub version: u32,
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
    pub maps: Vec<MapRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRecord {
    pub title: String,
    pub places: Vec<PlaceRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub title: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CollectionDocument {
    pub fn new(maps: &[UserMap], saved_at: DateTime<Utc>) -> Self {
        Self {
            version: CURRENT_VERSION,
            saved_at: Some(saved_at),
            maps: maps.iter().map(MapRecord::from).collect(),
        }
    }
}

impl From<&UserMap> for MapRecord {
    fn from(map: &UserMap) -> Self {
        Self {
            title: map.title().to_string(),
            places: map.places().iter().map(PlaceRecord::from).collect(),
        }
    }
}

impl From<&Place> for PlaceRecord {
    fn from(place: &Place) -> Self {
        Self {
            title: place.title().to_string(),
            description: place.description().to_string(),
            latitude: place.latitude(),
            longitude: place.longitude(),
        }
    }
}

impl TryFrom<MapRecord> for UserMap {
    type Error = ValidationError;

    fn try_from(record: MapRecord) -> Result<Self, Self::Error> {
        let places = record
            .places
            .into_iter()
            .map(|p| Place::new(p.title, p.description, LatLng::new(p.latitude, p.longitude)))
            .collect::<Result<Vec<_>, _>>()?;
        UserMap::new(record.title, places)
    }
}
