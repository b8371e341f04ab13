use std::fmt;

use async_trait::async_trait;

use super::types::PoiResponse;
use crate::geo::Region;

/// Errors that can occur while fetching POIs.
/// Every variant is recovered at the call site; none aborts the application.
#[derive(Debug, Clone)]
pub enum PoiError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service answered with a non-success status.
    Api { status: u16, message: String },
    /// The response body was not the expected JSON shape.
    Parse(String),
}

impl fmt::Display for PoiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoiError::Network(msg) => write!(f, "network error: {msg}"),
            PoiError::Api { status, message } => {
                write!(f, "POI service error (HTTP {status}): {message}")
            }
            PoiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for PoiError {}

#[async_trait]
pub trait PoiProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Fetches the POIs visible inside the given viewport.
    ///
    /// A successful response may still carry no POI list; that case is
    /// surfaced as `PoiResponse { pois: None }`, not as an error.
    async fn fetch_pois(&self, region: &Region) -> Result<PoiResponse, PoiError>;
}
