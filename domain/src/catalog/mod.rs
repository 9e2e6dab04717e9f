//! Master-data catalog: the typed records behind the back-office screens.
//!
//! Entities are plain serde structs with a shared [`CatalogEntry`](entry::CatalogEntry)
//! trait for identity and the minimal presence validation the intake forms
//! perform. None of this persists; stores are injected and transient.

pub mod entities;
pub mod entry;
pub mod finance;
pub mod org;
pub mod tariff;

pub use entities::{Amenity, EnrouteService, FleetVehicle, Flight, Guide, Hotel};
pub use entry::{CatalogEntry, EntryId};
pub use finance::{Bank, BillingInstruction, Currency, TaxRate};
pub use org::{AdditionalRequirement, AgencyProfile, Division, EmergencyContact, MarketType};
pub use tariff::Tariff;
