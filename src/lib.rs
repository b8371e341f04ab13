//! Roam library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod geo;
pub mod location;
pub mod poi;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How the user's current location is resolved.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum LocationSource {
    /// Geolocate the machine's public IP address.
    #[default]
    IpLookup,
    /// Use fixed coordinates from the config file.
    Fixed,
}

impl LocationSource {
    /// Parses the names used in config files and env vars.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ip-lookup" => Some(LocationSource::IpLookup),
            "fixed" => Some(LocationSource::Fixed),
            _ => None,
        }
    }
}
