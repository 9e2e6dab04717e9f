//! Financial master data: banks, currencies, tax rates, billing instructions.

use crate::catalog::entities::impl_catalog_entry;
use crate::catalog::entry::{CatalogEntry, EntryId};
use crate::core::error::DomainError;
use crate::costing::cost_sheet::GstType;
use serde::{Deserialize, Serialize};

/// A bank account the agency receives payments into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: EntryId,
    pub name: String,
    pub branch: String,
    pub account_number: String,
    pub swift_code: Option<String>,
}

impl Bank {
    pub fn new(
        id: impl Into<EntryId>,
        name: impl Into<String>,
        branch: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            branch: branch.into(),
            account_number: account_number.into(),
            swift_code: None,
        }
    }

    pub fn with_swift(mut self, swift: impl Into<String>) -> Self {
        self.swift_code = Some(swift.into());
        self
    }
}

impl_catalog_entry!(Bank, "bank");

/// A quoting currency with its conversion rate to the base currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub id: EntryId,
    /// ISO 4217 code, e.g. "USD".
    pub name: String,
    pub symbol: String,
    /// Units of base currency per one unit of this currency.
    pub rate_to_base: f64,
}

impl Currency {
    pub fn new(
        id: impl Into<EntryId>,
        code: impl Into<String>,
        symbol: impl Into<String>,
        rate_to_base: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: code.into(),
            symbol: symbol.into(),
            rate_to_base,
        }
    }
}

impl_catalog_entry!(Currency, "currency");

/// A named GST slab that quotations can reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRate {
    pub id: EntryId,
    pub name: String,
    pub percent: f64,
    pub gst_type: GstType,
}

impl TaxRate {
    pub fn new(id: impl Into<EntryId>, name: impl Into<String>, percent: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            percent,
            gst_type: GstType::default(),
        }
    }

    pub fn with_gst_type(mut self, gst_type: GstType) -> Self {
        self.gst_type = gst_type;
        self
    }
}

impl CatalogEntry for TaxRate {
    const ENTITY: &'static str = "tax rate";

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    /// Tax slabs also reject negative percentages on top of the usual
    /// name presence check.
    fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::missing_name(Self::ENTITY));
        }
        if self.percent < 0.0 {
            return Err(DomainError::InvalidPercentage {
                field: "tax percent",
                value: self.percent,
            });
        }
        Ok(())
    }
}

/// Standing billing instructions for a client account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingInstruction {
    pub id: EntryId,
    /// Client the instruction belongs to.
    pub name: String,
    pub instruction: String,
    pub currency_id: Option<EntryId>,
}

impl BillingInstruction {
    pub fn new(
        id: impl Into<EntryId>,
        client: impl Into<String>,
        instruction: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: client.into(),
            instruction: instruction.into(),
            currency_id: None,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<EntryId>) -> Self {
        self.currency_id = Some(currency.into());
        self
    }
}

impl_catalog_entry!(BillingInstruction, "billing instruction");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_rejects_negative_percent() {
        let slab = TaxRate::new("tax-001", "GST 5", -5.0);
        assert!(slab.validate().is_err());
        let ok = TaxRate::new("tax-002", "GST 5", 5.0);
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_tax_rate_still_requires_name() {
        let blank = TaxRate::new("tax-004", "  ", 5.0);
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_tax_rate_gst_type_defaults_to_igst() {
        let slab = TaxRate::new("tax-003", "GST 18", 18.0);
        assert_eq!(slab.gst_type, GstType::Igst);
        let split = slab.with_gst_type(GstType::CgstSgst);
        assert_eq!(split.gst_type, GstType::CgstSgst);
    }

    #[test]
    fn test_bank_builder() {
        let bank = Bank::new("bnk-001", "State Bank", "Connaught Place", "0012345678")
            .with_swift("SBININBB");
        assert_eq!(bank.swift_code.as_deref(), Some("SBININBB"));
        assert!(bank.validate().is_ok());
    }

    #[test]
    fn test_currency_name_is_code() {
        let usd = Currency::new("cur-usd", "USD", "$", 83.2);
        assert_eq!(usd.name(), "USD");
    }
}
