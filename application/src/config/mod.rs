//! Application-level configuration slices.

pub mod agency_defaults;

pub use agency_defaults::AgencyDefaults;
