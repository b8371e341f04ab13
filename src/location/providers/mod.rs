pub mod fixed;
pub mod ip_lookup;

pub use fixed::FixedProvider;
pub use ip_lookup::IpLookupProvider;
