pub mod nearby;

pub use nearby::NearbyPlacesProvider;
