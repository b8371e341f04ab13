//! Fixed-coordinates backend: answers with coordinates from configuration.

use async_trait::async_trait;
use log::info;

use crate::geo::Coordinates;
use crate::location::{LocationError, LocationProvider};

/// Location provider that returns configured coordinates.
pub struct FixedProvider {
    coords: Option<Coordinates>,
    consent: bool,
}

impl FixedProvider {
    pub fn new(coords: Option<Coordinates>, consent: bool) -> Self {
        Self { coords, consent }
    }
}

#[async_trait]
impl LocationProvider for FixedProvider {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        if !self.consent {
            info!("Location query refused: consent not granted");
            return Err(LocationError::ConsentWithheld);
        }
        match self.coords {
            Some(coords) if coords.is_valid() => Ok(coords),
            Some(coords) => Err(LocationError::Unconfigured(format!(
                "fixed coordinates are not finite ({}, {})",
                coords.latitude, coords.longitude
            ))),
            None => Err(LocationError::Unconfigured(
                "no fixed coordinates set (location.fixed_latitude/fixed_longitude)".to_string(),
            )),
        }
    }
}
