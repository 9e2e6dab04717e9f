//! Travel product entities: hotels, flights, fleet, guides, enroute stops.

use crate::catalog::entry::{CatalogEntry, EntryId};
use serde::{Deserialize, Serialize};

macro_rules! impl_catalog_entry {
    ($type:ty, $entity:literal) => {
        impl CatalogEntry for $type {
            const ENTITY: &'static str = $entity;

            fn id(&self) -> &EntryId {
                &self.id
            }

            fn name(&self) -> &str {
                &self.name
            }
        }
    };
}

pub(crate) use impl_catalog_entry;

/// A property the agency can book rooms at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: EntryId,
    pub name: String,
    pub city: String,
    pub star_rating: u8,
    pub amenity_ids: Vec<EntryId>,
}

impl Hotel {
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            star_rating: 0,
            amenity_ids: Vec::new(),
        }
    }

    pub fn with_star_rating(mut self, stars: u8) -> Self {
        self.star_rating = stars.min(7);
        self
    }

    pub fn with_amenity(mut self, amenity: impl Into<EntryId>) -> Self {
        self.amenity_ids.push(amenity.into());
        self
    }
}

impl_catalog_entry!(Hotel, "hotel");

/// A bookable flight sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: EntryId,
    /// Carrier plus flight number, e.g. "AI 433".
    pub name: String,
    pub carrier: String,
    /// Sector as "FROM-TO" airport codes.
    pub sector: String,
    pub travel_class: String,
}

impl Flight {
    pub fn new(
        id: impl Into<EntryId>,
        name: impl Into<String>,
        carrier: impl Into<String>,
        sector: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            carrier: carrier.into(),
            sector: sector.into(),
            travel_class: "Economy".to_string(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.travel_class = class.into();
        self
    }
}

impl_catalog_entry!(Flight, "flight");

/// A vehicle in the transfer fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetVehicle {
    pub id: EntryId,
    pub name: String,
    pub vehicle_type: String,
    pub seats: u8,
}

impl FleetVehicle {
    pub fn new(
        id: impl Into<EntryId>,
        name: impl Into<String>,
        vehicle_type: impl Into<String>,
        seats: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            vehicle_type: vehicle_type.into(),
            seats,
        }
    }
}

impl_catalog_entry!(FleetVehicle, "fleet vehicle");

/// A licensed tour guide with a day rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub id: EntryId,
    pub name: String,
    pub languages: Vec<String>,
    pub day_rate: f64,
}

impl Guide {
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>, day_rate: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            languages: Vec::new(),
            day_rate,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.languages.push(language.into());
        self
    }
}

impl_catalog_entry!(Guide, "guide");

/// A paid stop along a driving route (meal halt, rest house, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrouteService {
    pub id: EntryId,
    pub name: String,
    pub route: String,
    pub cost: f64,
}

impl EnrouteService {
    pub fn new(
        id: impl Into<EntryId>,
        name: impl Into<String>,
        route: impl Into<String>,
        cost: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            route: route.into(),
            cost,
        }
    }
}

impl_catalog_entry!(EnrouteService, "enroute service");

/// A hotel amenity referenced by id from [`Hotel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: EntryId,
    pub name: String,
}

impl Amenity {
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl_catalog_entry!(Amenity, "amenity");
