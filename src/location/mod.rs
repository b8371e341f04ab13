pub mod provider;
pub mod providers;

pub use provider::{LocationError, LocationProvider};
pub use providers::{FixedProvider, IpLookupProvider};
