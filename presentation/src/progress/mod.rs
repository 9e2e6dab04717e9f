//! Progress reporting for AI round-trips

pub mod reporter;

pub use reporter::{ProgressReporter, SimpleProgress};
