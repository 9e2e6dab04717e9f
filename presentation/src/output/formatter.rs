//! Output formatter trait

use tourdesk_application::PricedQuotation;
use tourdesk_domain::{CostSheet, GeneratedItinerary, LeadAnalysis};

/// Trait for formatting back-office results
pub trait OutputFormatter {
    /// Format a bare cost sheet
    fn format_sheet(&self, sheet: &CostSheet, adults: u32) -> String;

    /// Format a priced quotation with its itemized preview
    fn format_priced(&self, priced: &PricedQuotation) -> String;

    /// Format a generated itinerary
    fn format_itinerary(&self, itinerary: &GeneratedItinerary) -> String;

    /// Format a lead analysis
    fn format_lead(&self, analysis: &LeadAnalysis) -> String;
}
