//! Costing core: aggregation, markup/fee/tax cascade, and preview rows.
//!
//! This module is pure arithmetic over plain data. There is no hidden state:
//! a [`CostSheet`](cost_sheet::CostSheet) is a deterministic function of its
//! inputs and rate parameters, recomputed in full on any change.

pub mod aggregation;
pub mod cost_sheet;
pub mod preview;

pub use aggregation::{ServiceCost, ServiceType};
pub use cost_sheet::{CostInputs, CostSheet, GstType, RateParams};
pub use preview::{CostSheetPreview, PreviewRow};
