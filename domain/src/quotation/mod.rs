//! Quotation/package entities feeding the costing cascade.

pub mod entities;

pub use entities::{PaxCounts, Quotation, QuotationStatus, ServiceLine};
