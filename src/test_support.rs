//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::core::config::DEFAULT_REGION;
use crate::core::screen::{MapScreen, ScreenMsg};
use crate::core::state::App;
use crate::geo::{Coordinates, Region};
use crate::location::{LocationError, LocationProvider};
use crate::poi::{Poi, PoiError, PoiProvider, PoiResponse};

/// Builds a POI with string coordinates, the way the service sends them.
pub fn poi(name: &str, latitude: &str, longitude: &str) -> Poi {
    Poi {
        name: name.to_string(),
        latitude: latitude.to_string(),
        longitude: longitude.to_string(),
        extra: serde_json::Map::new(),
    }
}

/// Scriptable POI provider that records every region it was asked about.
///
/// Responses are served front-to-back; once the script runs out, every
/// further fetch answers with an empty POI list.
pub struct MockPoiProvider {
    responses: Mutex<VecDeque<Result<PoiResponse, PoiError>>>,
    fetched: Mutex<Vec<Region>>,
}

impl MockPoiProvider {
    pub fn new() -> Self {
        Self::with_responses(vec![])
    }

    pub fn with_responses(responses: Vec<Result<PoiResponse, PoiError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            fetched: Mutex::new(Vec::new()),
        }
    }

    /// Regions fetched so far, in call order.
    pub fn fetched(&self) -> Vec<Region> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl PoiProvider for MockPoiProvider {
    fn name(&self) -> &str {
        "mock-poi"
    }

    async fn fetch_pois(&self, region: &Region) -> Result<PoiResponse, PoiError> {
        self.fetched.lock().unwrap().push(*region);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(PoiResponse { pois: Some(vec![]) }))
    }
}

/// Location provider with a fixed outcome.
pub struct MockLocationProvider {
    result: Result<Coordinates, LocationError>,
}

impl MockLocationProvider {
    pub fn ok(latitude: f64, longitude: f64) -> Self {
        Self {
            result: Ok(Coordinates::new(latitude, longitude)),
        }
    }

    pub fn err(error: LocationError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl LocationProvider for MockLocationProvider {
    fn name(&self) -> &str {
        "mock-location"
    }

    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        self.result.clone()
    }
}

/// Creates a MapScreen over the default region with the given mocks, plus
/// the receiving end of its completion channel.
pub fn test_screen(
    poi: Arc<MockPoiProvider>,
    location: Arc<MockLocationProvider>,
) -> (MapScreen, mpsc::UnboundedReceiver<ScreenMsg>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let screen = MapScreen::new(App::new(DEFAULT_REGION), poi, location, tx);
    (screen, rx)
}
