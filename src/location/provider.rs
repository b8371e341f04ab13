use std::fmt;

use async_trait::async_trait;

use crate::geo::Coordinates;

/// Errors that can occur while resolving the user's location.
#[derive(Debug, Clone)]
pub enum LocationError {
    /// The user has not granted location consent. The query is never issued.
    ConsentWithheld,
    /// The backend needs configuration it doesn't have (e.g. fixed coordinates).
    Unconfigured(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The service answered with a non-success status.
    Api { status: u16, message: String },
    /// The lookup ran but could not produce coordinates.
    Lookup(String),
    /// The response body was not the expected shape.
    Parse(String),
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::ConsentWithheld => write!(f, "location consent not granted"),
            LocationError::Unconfigured(msg) => write!(f, "location not configured: {msg}"),
            LocationError::Network(msg) => write!(f, "network error: {msg}"),
            LocationError::Api { status, message } => {
                write!(f, "location service error (HTTP {status}): {message}")
            }
            LocationError::Lookup(msg) => write!(f, "location lookup failed: {msg}"),
            LocationError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for LocationError {}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Resolves the user's current coordinates.
    ///
    /// Implementations check consent first and return
    /// [`LocationError::ConsentWithheld`] without touching the network when
    /// it was not granted.
    async fn current_location(&self) -> Result<Coordinates, LocationError>;
}
