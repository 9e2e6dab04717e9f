//! Cost-sheet preview: per-category display rows with row-level markup.
//!
//! The preview re-applies the markup formula independently to each cost
//! category for itemized display. These row figures are never fed back into
//! the aggregate cascade, so markup is not compounded; the flip side is that
//! the grand-total row can differ from the sheet's `final_sale_price` by a
//! cent or two of accumulated rounding. That mismatch is long-standing
//! display behavior and is kept as-is.

use crate::costing::cost_sheet::CostSheet;
use crate::util::round2;
use serde::Serialize;

/// One itemized category row: base cost plus row-level markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewRow {
    pub category: &'static str,
    pub base_cost: f64,
    pub markup_amount: f64,
    pub marked_up_total: f64,
}

impl PreviewRow {
    fn new(category: &'static str, base_cost: f64, markup_percentage: f64) -> Self {
        let markup_amount = round2(base_cost * markup_percentage / 100.0);
        Self {
            category,
            base_cost,
            markup_amount,
            marked_up_total: round2(base_cost + markup_amount),
        }
    }
}

/// The rendered preview: itemized rows plus the aggregate sheet figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSheetPreview {
    pub rows: Vec<PreviewRow>,
    /// Sum of the marked-up rows (display only; see module docs).
    pub grand_total: f64,
    pub sheet: CostSheet,
}

impl CostSheetPreview {
    /// Build the preview from a computed sheet.
    ///
    /// Zero-cost categories are skipped, matching the itemized table which
    /// only shows services the quotation actually uses.
    pub fn from_sheet(sheet: CostSheet) -> Self {
        let rows: Vec<PreviewRow> = sheet
            .inputs
            .categories()
            .iter()
            .filter(|(_, cost)| *cost > 0.0)
            .map(|(category, cost)| {
                PreviewRow::new(category, *cost, sheet.rates.markup_percentage)
            })
            .collect();

        let grand_total = round2(rows.iter().map(|r| r.marked_up_total).sum());

        Self {
            rows,
            grand_total,
            sheet,
        }
    }
}
