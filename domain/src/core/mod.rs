//! Core domain types shared across modules.

pub mod error;

pub use error::DomainError;
