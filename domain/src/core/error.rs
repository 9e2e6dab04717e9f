//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{entity} name is required")]
    MissingName { entity: &'static str },

    #[error("Invalid percentage for {field}: {value}")]
    InvalidPercentage { field: &'static str, value: f64 },

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Invalid quotation: {0}")]
    InvalidQuotation(String),
}

impl DomainError {
    /// Shorthand for the presence-check failure used by catalog validation.
    pub fn missing_name(entity: &'static str) -> Self {
        DomainError::MissingName { entity }
    }
}
