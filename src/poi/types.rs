use log::debug;
use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

/// A point of interest as the remote service sends it.
///
/// Latitude and longitude arrive as JSON strings and are only parsed to
/// floats when a marker is placed. Fields we don't model are kept verbatim
/// in `extra` so the full upstream record survives a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Poi {
    /// Parses the string coordinates, returning `None` when either component
    /// is not a finite float. Callers skip such POIs at render time.
    pub fn position(&self) -> Option<Coordinates> {
        let latitude: f64 = self.latitude.trim().parse().ok()?;
        let longitude: f64 = self.longitude.trim().parse().ok()?;
        let coords = Coordinates::new(latitude, longitude);
        if !coords.is_valid() {
            debug!("POI '{}' has non-finite coordinates", self.name);
            return None;
        }
        Some(coords)
    }
}

/// The response body of the POI service.
///
/// A missing `pois` field is a valid response, distinct from an empty list:
/// the caller keeps its previous collection in that case.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PoiResponse {
    pub pois: Option<Vec<Poi>>,
}
