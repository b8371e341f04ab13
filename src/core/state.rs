//! # Application State
//!
//! Core business state for Roam. This module contains domain state only -
//! no TUI-specific types.
//!
//! ```text
//! App
//! ├── region: Region                      // visible map viewport
//! ├── user_location: Option<Coordinates>  // last successful location query
//! ├── pois: Vec<Poi>                      // markers for the current viewport
//! └── status_message: String              // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.
//!
//! Two fields only move forward: `pois` is fully replaced by each successful
//! fetch (never merged, never rolled back), and `user_location` goes from
//! absent to known and then stays set, stale or not, for the rest of the
//! process.

use crate::core::config::ResolvedConfig;
use crate::geo::{Coordinates, Region};
use crate::poi::Poi;

pub struct App {
    pub region: Region,
    pub user_location: Option<Coordinates>,
    pub pois: Vec<Poi>,
    pub status_message: String,
}

impl App {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            user_location: None,
            pois: Vec::new(),
            status_message: String::from("Arrows pan, +/- zoom, c centers on you, q quits"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_REGION;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new(DEFAULT_REGION);
        assert_eq!(app.region, DEFAULT_REGION);
        assert!(app.user_location.is_none());
        assert!(app.pois.is_empty());
        assert!(app.status_message.contains("pan"));
    }
}
