//! Use cases orchestrating domain logic through the ports.

pub mod analyze_lead;
pub mod generate_itinerary;
pub mod manage_catalog;
pub mod price_quotation;
