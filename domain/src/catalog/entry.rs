//! Catalog entry identity and validation.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a catalog entry or quotation (Value Object).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Common surface of all master-data records.
///
/// Validation is deliberately minimal: the intake forms only ever checked
/// name presence, and that contract is kept here rather than tightened.
pub trait CatalogEntry: Send + Sync {
    /// Entity label used in error messages ("hotel", "currency", ...).
    const ENTITY: &'static str;

    fn id(&self) -> &EntryId;

    fn name(&self) -> &str;

    fn validate(&self) -> Result<(), DomainError> {
        if self.name().trim().is_empty() {
            return Err(DomainError::missing_name(Self::ENTITY));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        id: EntryId,
        name: String,
    }

    impl CatalogEntry for Probe {
        const ENTITY: &'static str = "probe";

        fn id(&self) -> &EntryId {
            &self.id
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    #[test]
    fn test_validate_accepts_named_entry() {
        let probe = Probe {
            id: EntryId::new("p-1"),
            name: "Named".to_string(),
        };
        assert!(probe.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let probe = Probe {
            id: EntryId::new("p-2"),
            name: "   ".to_string(),
        };
        let err = probe.validate().unwrap_err();
        assert_eq!(err.to_string(), "probe name is required");
    }

    #[test]
    fn test_entry_id_display() {
        assert_eq!(EntryId::new("htl-001").to_string(), "htl-001");
    }
}
