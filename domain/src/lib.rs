//! Domain layer for tourdesk
//!
//! This crate contains the core business logic, entities, and value objects
//! of the travel back-office. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Costing
//!
//! The costing cascade is the heart of the system:
//!
//! - **Land cost**: sum of all direct service cost buckets
//! - **Markup**: agency margin percentage applied to land cost
//! - **ISO fee**: management-fee percentage applied after markup
//! - **GST**: tax percentage applied last, yielding the final sale price
//!
//! Each derived figure is rounded to two decimal places at its own stage;
//! the cascade order and per-stage rounding are contractual.
//!
//! ## Catalog / Quotation
//!
//! Master data (hotels, guides, currencies, taxes, ...) and quotations are
//! plain entities behind an injectable store; nothing here persists.

pub mod catalog;
pub mod core;
pub mod costing;
pub mod itinerary;
pub mod prompt;
pub mod quotation;
pub mod util;

// Re-export commonly used types
pub use catalog::{
    entities::{Amenity, EnrouteService, FleetVehicle, Flight, Guide, Hotel},
    entry::{CatalogEntry, EntryId},
    finance::{Bank, BillingInstruction, Currency, TaxRate},
    org::{AdditionalRequirement, AgencyProfile, Division, EmergencyContact, MarketType},
    tariff::Tariff,
};
pub use core::error::DomainError;
pub use costing::{
    aggregation::{ServiceCost, ServiceType},
    cost_sheet::{CostInputs, CostSheet, GstType, RateParams},
    preview::{CostSheetPreview, PreviewRow},
};
pub use itinerary::{
    generated::{GeneratedItinerary, ItineraryDay},
    lead::{LeadAnalysis, Sentiment},
    parsing::{parse_itinerary, parse_itinerary_json, parse_lead_analysis},
};
pub use prompt::template::PromptTemplate;
pub use quotation::entities::{PaxCounts, Quotation, QuotationStatus, ServiceLine};
pub use util::round2;
