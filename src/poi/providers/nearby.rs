//! Provider for `get-place-nearby` style POI services.
//!
//! The wire contract is a plain GET with the viewport's four numbers as
//! decimal query parameters and a JSON object back, possibly carrying a
//! `pois` array.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::geo::Region;
use crate::poi::{PoiError, PoiProvider, PoiResponse};

pub const DEFAULT_NEARBY_ENDPOINT: &str = "https://solving.ai/public/api/get-place-nearby.php";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Turns a viewport into the service's query parameters.
///
/// Parameter names follow the service contract (camelCase deltas), values are
/// the plain decimal renderings of the region's four fields.
fn region_params(region: &Region) -> [(&'static str, String); 4] {
    [
        ("latitude", region.latitude.to_string()),
        ("longitude", region.longitude.to_string()),
        ("latitudeDelta", region.latitude_delta.to_string()),
        ("longitudeDelta", region.longitude_delta.to_string()),
    ]
}

/// POI provider backed by a `get-place-nearby` HTTP endpoint.
pub struct NearbyPlacesProvider {
    endpoint: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl NearbyPlacesProvider {
    /// Creates a new provider.
    ///
    /// # Arguments
    /// * `endpoint` - Optional custom endpoint (defaults to the public service)
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_NEARBY_ENDPOINT.to_string()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            client: reqwest::Client::new(),
        }
    }

    /// Same as [`new`](Self::new) with a custom request timeout.
    pub fn with_timeout(endpoint: Option<String>, timeout_secs: u64) -> Self {
        let mut provider = Self::new(endpoint);
        provider.timeout = Duration::from_secs(timeout_secs);
        provider
    }
}

#[async_trait]
impl PoiProvider for NearbyPlacesProvider {
    fn name(&self) -> &str {
        "nearby-places"
    }

    async fn fetch_pois(&self, region: &Region) -> Result<PoiResponse, PoiError> {
        let params = region_params(region);
        info!(
            "POI request: lat={}, lon={}, span=({}, {})",
            params[0].1, params[1].1, params[2].1, params[3].1
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| PoiError::Network(e.to_string()))?;

        debug!("POI service response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("POI service error: {} - {}", status, err_body);
            return Err(PoiError::Api {
                status,
                message: err_body,
            });
        }

        let body: PoiResponse = response
            .json()
            .await
            .map_err(|e| PoiError::Parse(e.to_string()))?;

        debug!(
            "POI response parsed: {} POIs",
            body.pois.as_ref().map_or(0, |p| p.len())
        );
        Ok(body)
    }
}
