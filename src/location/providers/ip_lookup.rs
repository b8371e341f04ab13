//! IP-based geolocation backend.
//!
//! Speaks the `ip-api.com` JSON contract: `GET {base}/json` answers with
//! `{"status":"success","lat":..,"lon":..}` or
//! `{"status":"fail","message":".."}`. Coarse, but it needs no hardware and
//! no API key.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::geo::Coordinates;
use crate::location::{LocationError, LocationProvider};

pub const DEFAULT_IP_LOOKUP_BASE_URL: &str = "http://ip-api.com";

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    message: Option<String>,
}

/// Location provider that geolocates the machine's public IP address.
pub struct IpLookupProvider {
    base_url: String,
    consent: bool,
    client: reqwest::Client,
}

impl IpLookupProvider {
    /// Creates a new provider.
    ///
    /// # Arguments
    /// * `base_url` - Optional custom base URL (defaults to ip-api.com)
    /// * `consent` - Whether the user granted location consent
    pub fn new(base_url: Option<String>, consent: bool) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_IP_LOOKUP_BASE_URL.to_string()),
            consent,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl LocationProvider for IpLookupProvider {
    fn name(&self) -> &str {
        "ip-lookup"
    }

    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        if !self.consent {
            info!("Location query refused: consent not granted");
            return Err(LocationError::ConsentWithheld);
        }

        let url = format!("{}/json", self.base_url);
        debug!("IP lookup request: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| LocationError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("IP lookup error: {} - {}", status, err_body);
            return Err(LocationError::Api {
                status,
                message: err_body,
            });
        }

        let body: IpLookupResponse = response
            .json()
            .await
            .map_err(|e| LocationError::Parse(e.to_string()))?;

        if body.status != "success" {
            let reason = body.message.unwrap_or_else(|| "no reason given".to_string());
            warn!("IP lookup refused: {}", reason);
            return Err(LocationError::Lookup(reason));
        }

        match (body.lat, body.lon) {
            (Some(lat), Some(lon)) => {
                let coords = Coordinates::new(lat, lon);
                if !coords.is_valid() {
                    return Err(LocationError::Parse(format!(
                        "non-finite coordinates ({lat}, {lon})"
                    )));
                }
                info!("IP lookup resolved to ({}, {})", lat, lon);
                Ok(coords)
            }
            _ => Err(LocationError::Parse(
                "success response without lat/lon".to_string(),
            )),
        }
    }
}
