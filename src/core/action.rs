//! # Actions
//!
//! Everything that can change state becomes an `Action`.
//! The viewport moved? That's `Action::SetRegion(region)`.
//! A fetch came back with markers? That's `Action::SetPois(pois)`.
//!
//! The `update()` function takes the current state and an action and mutates
//! the state accordingly. No side effects here. I/O happens in
//! [`screen`](crate::core::screen).
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! This makes everything testable: apply an action, assert on the state.

use log::debug;

use crate::core::state::App;
use crate::geo::{Coordinates, Region};
use crate::poi::Poi;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the visible viewport.
    SetRegion(Region),
    /// Record a successful location query. Never cleared afterwards.
    SetUserLocation(Coordinates),
    /// Replace the whole POI collection (an empty list is a valid
    /// replacement; "no list at all" never reaches the reducer).
    SetPois(Vec<Poi>),
    /// Set the status bar text.
    SetStatus(String),
}

pub fn update(app: &mut App, action: Action) {
    debug!("update: {:?}", action);
    match action {
        Action::SetRegion(region) => app.region = region,
        Action::SetUserLocation(coords) => app.user_location = Some(coords),
        Action::SetPois(pois) => app.pois = pois,
        Action::SetStatus(message) => app.status_message = message,
    }
}
