pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{PoiError, PoiProvider};
pub use providers::NearbyPlacesProvider;
pub use types::{Poi, PoiResponse};
