//! Agency-wide default rate parameters.
//!
//! [`AgencyDefaults`] carries the rates pre-filled into every new quotation
//! before the operator adjusts them. These are application-layer settings,
//! not domain policy; the domain cascade takes whatever rates it is given.

use serde::{Deserialize, Serialize};
use tourdesk_domain::RateParams;

/// Default rates and currency applied to new quotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyDefaults {
    /// Agency margin percentage.
    pub markup_percentage: f64,
    /// Management-fee percentage applied after markup.
    pub iso_commission: f64,
    /// Tax percentage applied last.
    pub gst_percentage: f64,
    /// ISO 4217 code used for display.
    pub currency: String,
}

impl Default for AgencyDefaults {
    fn default() -> Self {
        Self {
            markup_percentage: 15.0,
            iso_commission: 2.0,
            gst_percentage: 5.0,
            currency: "INR".to_string(),
        }
    }
}

impl AgencyDefaults {
    // ==================== Builder Methods ====================

    pub fn with_markup(mut self, percent: f64) -> Self {
        self.markup_percentage = percent;
        self
    }

    pub fn with_iso_commission(mut self, percent: f64) -> Self {
        self.iso_commission = percent;
        self
    }

    pub fn with_gst(mut self, percent: f64) -> Self {
        self.gst_percentage = percent;
        self
    }

    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    /// Rate parameters for a fresh quotation.
    pub fn rate_params(&self) -> RateParams {
        RateParams::new(
            self.markup_percentage,
            self.iso_commission,
            self.gst_percentage,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let defaults = AgencyDefaults::default();
        assert_eq!(defaults.markup_percentage, 15.0);
        assert_eq!(defaults.iso_commission, 2.0);
        assert_eq!(defaults.gst_percentage, 5.0);
        assert_eq!(defaults.currency, "INR");
    }

    #[test]
    fn test_builder() {
        let defaults = AgencyDefaults::default()
            .with_markup(20.0)
            .with_gst(18.0)
            .with_currency("USD");
        assert_eq!(defaults.markup_percentage, 20.0);
        assert_eq!(defaults.gst_percentage, 18.0);
        assert_eq!(defaults.currency, "USD");
    }

    #[test]
    fn test_rate_params() {
        let rates = AgencyDefaults::default().rate_params();
        assert_eq!(rates.markup_percentage, 15.0);
        assert_eq!(rates.iso_commission, 2.0);
        assert_eq!(rates.gst_percentage, 5.0);
    }
}
