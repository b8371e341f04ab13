//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.roam/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::LocationSource;
use crate::geo::{Coordinates, Region};
use crate::poi::providers::nearby::DEFAULT_NEARBY_ENDPOINT;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RoamConfig {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub poi: PoiConfig,
    #[serde(default)]
    pub location: LocationConfig,
}

/// The starting viewport. Partial overrides are fine; any field left out
/// falls back to the default region.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MapConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub latitude_delta: Option<f64>,
    pub longitude_delta: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PoiConfig {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LocationConfig {
    /// "ip-lookup" or "fixed"
    pub source: Option<String>,
    pub allow: Option<bool>,
    pub fixed_latitude: Option<f64>,
    pub fixed_longitude: Option<f64>,
    pub ip_lookup_base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Starting viewport of the original map application (Montreal).
pub const DEFAULT_REGION: Region = Region {
    latitude: 45.55071,
    longitude: -73.59808,
    latitude_delta: 0.18721,
    longitude_delta: 0.24633,
};

pub const DEFAULT_POI_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub region: Region,
    pub poi_endpoint: String,
    pub poi_timeout_secs: u64,
    pub location_source: LocationSource,
    pub allow_location: bool,
    pub fixed_coordinates: Option<Coordinates>,
    pub ip_lookup_base_url: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.roam/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".roam").join("config.toml"))
}

/// Load config from `~/.roam/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `RoamConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<RoamConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(RoamConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(RoamConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: RoamConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Roam Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [map]
# latitude = 45.55071          # Starting viewport center
# longitude = -73.59808
# latitude_delta = 0.18721     # Starting viewport span
# longitude_delta = 0.24633

# [poi]
# endpoint = "https://solving.ai/public/api/get-place-nearby.php"
# timeout_secs = 30            # Or set ROAM_POI_ENDPOINT env var

# [location]
# source = "ip-lookup"         # "ip-lookup" or "fixed"
# allow = false                # Location consent; or --allow-location,
#                              # or ROAM_ALLOW_LOCATION=true
# fixed_latitude = 45.5017     # Used by the "fixed" source
# fixed_longitude = -73.5673
# ip_lookup_base_url = "http://ip-api.com"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_location`, `cli_allow_location` and `cli_endpoint` come from CLI flags
/// (`None`/`false` = not specified).
pub fn resolve(
    config: &RoamConfig,
    cli_location: Option<LocationSource>,
    cli_allow_location: bool,
    cli_endpoint: Option<&str>,
) -> ResolvedConfig {
    // Location source: CLI → env → config → default
    let location_source = cli_location
        .or_else(|| parse_source(std::env::var("ROAM_LOCATION_SOURCE").ok().as_deref()))
        .or_else(|| parse_source(config.location.source.as_deref()))
        .unwrap_or_default();

    // POI endpoint: CLI → env → config → default
    let poi_endpoint = cli_endpoint
        .map(|s| s.to_string())
        .or_else(|| std::env::var("ROAM_POI_ENDPOINT").ok())
        .or_else(|| config.poi.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_NEARBY_ENDPOINT.to_string());

    // Consent: granting anywhere grants it
    let env_allow = std::env::var("ROAM_ALLOW_LOCATION")
        .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);
    let allow_location = cli_allow_location || env_allow || config.location.allow.unwrap_or(false);

    // Fixed coordinates require both components
    let fixed_coordinates = match (
        config.location.fixed_latitude,
        config.location.fixed_longitude,
    ) {
        (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
        _ => None,
    };

    ResolvedConfig {
        region: resolve_region(&config.map),
        poi_endpoint,
        poi_timeout_secs: config.poi.timeout_secs.unwrap_or(DEFAULT_POI_TIMEOUT_SECS),
        location_source,
        allow_location,
        fixed_coordinates,
        ip_lookup_base_url: config.location.ip_lookup_base_url.clone(),
    }
}

/// Collapses the sparse `[map]` section onto the default region, then falls
/// back entirely to the default if the result is not a valid viewport.
fn resolve_region(map: &MapConfig) -> Region {
    let region = Region {
        latitude: map.latitude.unwrap_or(DEFAULT_REGION.latitude),
        longitude: map.longitude.unwrap_or(DEFAULT_REGION.longitude),
        latitude_delta: map.latitude_delta.unwrap_or(DEFAULT_REGION.latitude_delta),
        longitude_delta: map
            .longitude_delta
            .unwrap_or(DEFAULT_REGION.longitude_delta),
    };
    if !region.is_valid() {
        warn!("Configured start region is invalid, using default: {:?}", region);
        return DEFAULT_REGION;
    }
    region
}

fn parse_source(name: Option<&str>) -> Option<LocationSource> {
    let name = name?;
    match LocationSource::from_name(name) {
        Some(source) => Some(source),
        None => {
            warn!("Unknown location source '{}', ignoring", name);
            None
        }
    }
}
