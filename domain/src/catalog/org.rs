//! Organizational master data: divisions, market types, requirements,
//! emergency contacts, and the agency profile.

use crate::catalog::entities::impl_catalog_entry;
use crate::catalog::entry::{CatalogEntry, EntryId};
use serde::{Deserialize, Serialize};

/// An internal sales/operations division.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Division {
    pub id: EntryId,
    pub name: String,
    pub head: Option<String>,
}

impl Division {
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            head: None,
        }
    }

    pub fn with_head(mut self, head: impl Into<String>) -> Self {
        self.head = Some(head.into());
        self
    }
}

impl_catalog_entry!(Division, "division");

/// A source market segment (e.g. "Domestic", "Inbound Europe").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketType {
    pub id: EntryId,
    pub name: String,
}

impl MarketType {
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl_catalog_entry!(MarketType, "market type");

/// A reusable additional-requirement line (visa letter, wheelchair, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalRequirement {
    pub id: EntryId,
    pub name: String,
    pub default_cost: f64,
}

impl AdditionalRequirement {
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>, default_cost: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            default_cost,
        }
    }
}

impl_catalog_entry!(AdditionalRequirement, "additional requirement");

/// A 24x7 emergency contact published on travel documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: EntryId,
    pub name: String,
    pub phone: String,
    pub region: Option<String>,
}

impl EmergencyContact {
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            region: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

impl_catalog_entry!(EmergencyContact, "emergency contact");

/// The agency's own profile, shown on printed quotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyProfile {
    pub id: EntryId,
    pub name: String,
    pub address: String,
    pub gst_number: Option<String>,
}

impl AgencyProfile {
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            gst_number: None,
        }
    }

    pub fn with_gst_number(mut self, gst: impl Into<String>) -> Self {
        self.gst_number = Some(gst.into());
        self
    }
}

impl_catalog_entry!(AgencyProfile, "agency profile");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_builder() {
        let division = Division::new("div-001", "Inbound").with_head("R. Mehta");
        assert_eq!(division.head.as_deref(), Some("R. Mehta"));
        assert!(division.validate().is_ok());
    }

    #[test]
    fn test_market_type_requires_name() {
        let blank = MarketType::new("mkt-001", "");
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_emergency_contact_region_optional() {
        let contact = EmergencyContact::new("emc-001", "Duty Manager", "+91-98100-00000");
        assert!(contact.region.is_none());
        let regional = contact.with_region("Rajasthan");
        assert_eq!(regional.region.as_deref(), Some("Rajasthan"));
    }
}
