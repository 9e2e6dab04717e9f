//! Cost sheet: input buckets, rate parameters, and the derived cascade.
//!
//! The cascade applies three percentages in a fixed order, each stage's base
//! including all prior additions:
//!
//! 1. markup on the land cost
//! 2. ISO (management) fee on land cost + markup
//! 3. GST on land cost + markup + fee
//!
//! Every derived figure is rounded to two decimals at its own stage via
//! [`round2`]. The order and the per-stage rounding are contractual: summing
//! unrounded intermediates produces a different final cent for some inputs.

use crate::util::round2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The eleven service cost buckets that make up the land cost.
///
/// All amounts are non-negative figures in the quotation's currency.
/// A default-constructed value is the all-zero vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostInputs {
    pub hotel: f64,
    pub transport: f64,
    pub flight: f64,
    pub guide: f64,
    pub activity: f64,
    pub monument: f64,
    pub meal: f64,
    pub misc: f64,
    pub escort: f64,
    pub enroute: f64,
    pub permit: f64,
}

impl CostInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all eleven buckets (unrounded).
    pub fn total(&self) -> f64 {
        self.hotel
            + self.transport
            + self.flight
            + self.guide
            + self.activity
            + self.monument
            + self.meal
            + self.misc
            + self.escort
            + self.enroute
            + self.permit
    }

    /// Labeled (category, amount) pairs in display order.
    pub fn categories(&self) -> [(&'static str, f64); 11] {
        [
            ("Hotel", self.hotel),
            ("Transport", self.transport),
            ("Flight", self.flight),
            ("Guide", self.guide),
            ("Activity", self.activity),
            ("Monument", self.monument),
            ("Meal", self.meal),
            ("Misc", self.misc),
            ("Escort", self.escort),
            ("Enroute", self.enroute),
            ("Permit", self.permit),
        ]
    }
}

/// GST treatment. Display-only: both variants produce identical arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GstType {
    #[default]
    Igst,
    CgstSgst,
}

impl fmt::Display for GstType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GstType::Igst => write!(f, "IGST"),
            GstType::CgstSgst => write!(f, "CGST/SGST"),
        }
    }
}

/// Rate parameters applied by the cascade.
///
/// `agent_commission` is carried for display on the sheet but does not enter
/// the computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateParams {
    pub markup_percentage: f64,
    pub agent_commission: f64,
    pub iso_commission: f64,
    pub gst_percentage: f64,
    pub gst_type: GstType,
}

impl RateParams {
    pub fn new(markup_percentage: f64, iso_commission: f64, gst_percentage: f64) -> Self {
        Self {
            markup_percentage,
            iso_commission,
            gst_percentage,
            ..Self::default()
        }
    }

    pub fn with_agent_commission(mut self, percent: f64) -> Self {
        self.agent_commission = percent;
        self
    }

    pub fn with_gst_type(mut self, gst_type: GstType) -> Self {
        self.gst_type = gst_type;
        self
    }
}

/// A computed financial summary for one quotation.
///
/// Derived fields are pure functions of `inputs` and `rates`; recomputation
/// with unchanged inputs is idempotent. The sheet is never stored beyond the
/// current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSheet {
    pub inputs: CostInputs,
    pub rates: RateParams,
    /// Sum of all eleven cost buckets, rounded.
    pub total_land_cost: f64,
    /// Agency margin on the land cost.
    pub markup_amount: f64,
    /// Management fee on land cost + markup.
    pub iso_amount: f64,
    /// Tax on land cost + markup + fee.
    pub gst_amount: f64,
    /// Pre-tax total: land cost + markup + fee.
    pub total_cost: f64,
    /// Final price after all three stages.
    pub final_sale_price: f64,
}

impl CostSheet {
    /// Compute a sheet from inputs and rates.
    pub fn compute(inputs: CostInputs, rates: RateParams) -> Self {
        let total_land_cost = round2(inputs.total());
        let markup_amount = round2(total_land_cost * rates.markup_percentage / 100.0);
        let sub_total = total_land_cost + markup_amount;
        let iso_amount = round2(sub_total * rates.iso_commission / 100.0);
        let taxable = sub_total + iso_amount;
        let gst_amount = round2(taxable * rates.gst_percentage / 100.0);
        let final_sale_price = round2(taxable + gst_amount);
        let total_cost = round2(total_land_cost + markup_amount + iso_amount);

        Self {
            inputs,
            rates,
            total_land_cost,
            markup_amount,
            iso_amount,
            gst_amount,
            total_cost,
            final_sale_price,
        }
    }

    /// Recompute all derived fields after mutating `inputs` or `rates`.
    pub fn recompute(&mut self) {
        *self = Self::compute(self.inputs, self.rates);
    }

    /// Final sale price divided across billable adults.
    ///
    /// A zero or unset pax count bills as one adult, so this never divides
    /// by zero.
    pub fn per_person_cost(&self, adults: u32) -> f64 {
        round2(self.final_sale_price / f64::from(adults.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_inputs() -> CostInputs {
        CostInputs {
            hotel: 1000.0,
            transport: 200.0,
            ..CostInputs::default()
        }
    }

    #[test]
    fn test_worked_example() {
        let rates = RateParams::new(15.0, 2.0, 5.0);
        let sheet = CostSheet::compute(example_inputs(), rates);

        assert_eq!(sheet.total_land_cost, 1200.00);
        assert_eq!(sheet.markup_amount, 180.00);
        assert_eq!(sheet.iso_amount, 27.60);
        assert_eq!(sheet.gst_amount, 70.38);
        assert_eq!(sheet.total_cost, 1407.60);
        assert_eq!(sheet.final_sale_price, 1477.98);
    }

    #[test]
    fn test_zero_rates_pass_through() {
        let rates = RateParams::new(0.0, 0.0, 0.0);
        let sheet = CostSheet::compute(example_inputs(), rates);

        assert_eq!(sheet.total_land_cost, 1200.00);
        assert_eq!(sheet.markup_amount, 0.00);
        assert_eq!(sheet.iso_amount, 0.00);
        assert_eq!(sheet.gst_amount, 0.00);
        assert_eq!(sheet.final_sale_price, sheet.total_land_cost);
    }

    #[test]
    fn test_final_price_never_below_land_cost() {
        let cases = [
            RateParams::new(0.0, 0.0, 0.0),
            RateParams::new(15.0, 2.0, 5.0),
            RateParams::new(100.0, 50.0, 28.0),
            RateParams::new(0.5, 0.5, 0.5),
        ];
        for rates in cases {
            let sheet = CostSheet::compute(example_inputs(), rates);
            assert!(
                sheet.final_sale_price >= sheet.total_land_cost,
                "final {} < land {} at {:?}",
                sheet.final_sale_price,
                sheet.total_land_cost,
                rates
            );
        }
    }

    #[test]
    fn test_recompute_idempotent() {
        let rates = RateParams::new(15.0, 2.0, 5.0);
        let mut sheet = CostSheet::compute(example_inputs(), rates);
        let before = sheet.clone();
        sheet.recompute();
        assert_eq!(sheet, before);
    }

    #[test]
    fn test_recompute_after_mutation() {
        let rates = RateParams::new(15.0, 2.0, 5.0);
        let mut sheet = CostSheet::compute(example_inputs(), rates);
        sheet.inputs.flight = 500.0;
        sheet.recompute();
        assert_eq!(sheet.total_land_cost, 1700.00);
        assert_eq!(sheet.markup_amount, 255.00);
    }

    #[test]
    fn test_agent_commission_is_display_only() {
        let plain = RateParams::new(15.0, 2.0, 5.0);
        let with_commission = plain.with_agent_commission(10.0);
        let a = CostSheet::compute(example_inputs(), plain);
        let b = CostSheet::compute(example_inputs(), with_commission);
        assert_eq!(a.final_sale_price, b.final_sale_price);
    }

    #[test]
    fn test_gst_type_is_display_only() {
        let igst = RateParams::new(15.0, 2.0, 5.0);
        let split = igst.with_gst_type(GstType::CgstSgst);
        let a = CostSheet::compute(example_inputs(), igst);
        let b = CostSheet::compute(example_inputs(), split);
        assert_eq!(a.gst_amount, b.gst_amount);
        assert_eq!(a.final_sale_price, b.final_sale_price);
    }

    #[test]
    fn test_per_person_cost_guards_zero_pax() {
        let rates = RateParams::new(15.0, 2.0, 5.0);
        let sheet = CostSheet::compute(example_inputs(), rates);
        assert_eq!(sheet.per_person_cost(0), sheet.final_sale_price);
        assert_eq!(sheet.per_person_cost(1), sheet.final_sale_price);
        assert_eq!(sheet.per_person_cost(2), 738.99);
    }

    #[test]
    fn test_empty_inputs_all_zero() {
        let sheet = CostSheet::compute(CostInputs::new(), RateParams::new(15.0, 2.0, 5.0));
        assert_eq!(sheet.total_land_cost, 0.0);
        assert_eq!(sheet.final_sale_price, 0.0);
        assert_eq!(sheet.per_person_cost(4), 0.0);
    }

    #[test]
    fn test_gst_type_display() {
        assert_eq!(GstType::Igst.to_string(), "IGST");
        assert_eq!(GstType::CgstSgst.to_string(), "CGST/SGST");
    }
}
