//! Application layer for tourdesk
//!
//! This crate defines the ports (interfaces to the outside world) and the
//! use cases that orchestrate domain logic. Adapters implementing the ports
//! live in the infrastructure layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AgencyDefaults;
pub use ports::{
    ai_gateway::{AiGateway, GatewayError},
    entity_store::{EntityStore, StoreError},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::{
    analyze_lead::{AnalyzeLeadInput, AnalyzeLeadUseCase},
    generate_itinerary::{
        GenerateItineraryError, GenerateItineraryInput, GenerateItineraryUseCase,
    },
    manage_catalog::{CatalogError, ManageCatalogUseCase},
    price_quotation::{PriceQuotationError, PriceQuotationUseCase, PricedQuotation, price_quotation},
};
