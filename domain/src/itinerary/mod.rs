//! AI-boundary result types: generated itineraries and lead-note analyses.
//!
//! The generative-AI service is an opaque request/response boundary; the
//! domain only defines the target shapes and how to recover them from the
//! model's text output.

pub mod generated;
pub mod lead;
pub mod parsing;

pub use generated::{GeneratedItinerary, ItineraryDay};
pub use lead::{LeadAnalysis, Sentiment};
pub use parsing::{parse_itinerary, parse_itinerary_json, parse_lead_analysis};
