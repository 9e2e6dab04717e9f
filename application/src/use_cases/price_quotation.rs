//! Price Quotation use case
//!
//! Aggregates a quotation's service lines into the cost buckets, runs the
//! markup/fee/tax cascade, and builds the itemized preview.

use crate::ports::entity_store::{EntityStore, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tourdesk_domain::{CostSheet, CostSheetPreview, DomainError, EntryId, Quotation};
use tracing::debug;

/// Errors that can occur while pricing a quotation
#[derive(Error, Debug)]
pub enum PriceQuotationError {
    #[error("Quotation not found: {0}")]
    NotFound(EntryId),

    #[error("Invalid quotation: {0}")]
    Invalid(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// A fully priced quotation: the sheet plus its display preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedQuotation {
    pub quotation: Quotation,
    pub sheet: CostSheet,
    pub preview: CostSheetPreview,
    pub per_person_cost: f64,
}

/// Use case for turning a quotation into a cost sheet
pub struct PriceQuotationUseCase<S: EntityStore<Quotation>> {
    store: Arc<S>,
}

impl<S: EntityStore<Quotation>> PriceQuotationUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Price a stored quotation by id.
    pub async fn execute(&self, id: &EntryId) -> Result<PricedQuotation, PriceQuotationError> {
        let quotation = self.store.get(id).await.map_err(|e| match e {
            StoreError::NotFound(id) => PriceQuotationError::NotFound(id),
            other => PriceQuotationError::Store(other),
        })?;
        price_quotation(quotation)
    }
}

/// Price a quotation held in memory (the console's working copy).
pub fn price_quotation(quotation: Quotation) -> Result<PricedQuotation, PriceQuotationError> {
    quotation.validate()?;

    let inputs = quotation.cost_inputs();
    let sheet = CostSheet::compute(inputs, quotation.rates);
    let per_person_cost = sheet.per_person_cost(quotation.pax.billable_adults());

    debug!(
        quotation = %quotation.id,
        land = sheet.total_land_cost,
        final_price = sheet.final_sale_price,
        "priced quotation"
    );

    let preview = CostSheetPreview::from_sheet(sheet.clone());

    Ok(PricedQuotation {
        quotation,
        sheet,
        preview,
        per_person_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tourdesk_domain::{PaxCounts, RateParams, ServiceLine, ServiceType};

    struct MapStore {
        entries: Mutex<HashMap<EntryId, Quotation>>,
    }

    impl MapStore {
        fn with(quotation: Quotation) -> Self {
            let mut entries = HashMap::new();
            entries.insert(quotation.id.clone(), quotation);
            Self {
                entries: Mutex::new(entries),
            }
        }
    }

    #[async_trait]
    impl EntityStore<Quotation> for MapStore {
        async fn list(&self) -> Result<Vec<Quotation>, StoreError> {
            Ok(self.entries.lock().unwrap().values().cloned().collect())
        }

        async fn get(&self, id: &EntryId) -> Result<Quotation, StoreError> {
            self.entries
                .lock()
                .unwrap()
                .get(id)
                .cloned()
                .ok_or_else(|| StoreError::NotFound(id.clone()))
        }

        async fn save(&self, id: EntryId, entity: Quotation) -> Result<(), StoreError> {
            self.entries.lock().unwrap().insert(id, entity);
            Ok(())
        }

        async fn remove(&self, id: &EntryId) -> Result<(), StoreError> {
            self.entries
                .lock()
                .unwrap()
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| StoreError::NotFound(id.clone()))
        }
    }

    fn sample_quotation() -> Quotation {
        let mut quotation = Quotation::new("qtn-001", "Baker family")
            .with_pax(PaxCounts::new(2, 0, 0))
            .with_rates(RateParams::new(15.0, 2.0, 5.0));
        quotation.add_line(ServiceLine::new(1, ServiceType::Hotel, "Lake Palace", 1000.0));
        quotation.add_line(ServiceLine::new(1, ServiceType::Tpt, "Airport pickup", 200.0));
        quotation
    }

    #[tokio::test]
    async fn test_execute_prices_stored_quotation() {
        let store = Arc::new(MapStore::with(sample_quotation()));
        let use_case = PriceQuotationUseCase::new(store);

        let priced = use_case.execute(&EntryId::new("qtn-001")).await.unwrap();
        assert_eq!(priced.sheet.total_land_cost, 1200.00);
        assert_eq!(priced.sheet.final_sale_price, 1477.98);
        assert_eq!(priced.per_person_cost, 738.99);
    }

    #[tokio::test]
    async fn test_execute_missing_quotation() {
        let store = Arc::new(MapStore::with(sample_quotation()));
        let use_case = PriceQuotationUseCase::new(store);

        let err = use_case.execute(&EntryId::new("qtn-404")).await.unwrap_err();
        assert!(matches!(err, PriceQuotationError::NotFound(_)));
    }

    #[test]
    fn test_price_rejects_invalid_quotation() {
        let quotation = Quotation::new("qtn-002", "   ");
        let err = price_quotation(quotation).unwrap_err();
        assert!(matches!(err, PriceQuotationError::Invalid(_)));
    }

    #[test]
    fn test_price_zero_pax_divides_by_one() {
        let mut quotation = sample_quotation();
        quotation.pax = PaxCounts::new(0, 0, 0);
        let priced = price_quotation(quotation).unwrap();
        assert_eq!(priced.per_person_cost, priced.sheet.final_sale_price);
    }

    #[test]
    fn test_preview_matches_sheet() {
        let priced = price_quotation(sample_quotation()).unwrap();
        assert_eq!(priced.preview.sheet, priced.sheet);
        assert_eq!(priced.preview.rows.len(), 2);
    }
}
