//! Quotation entities: pax counts, per-day service lines, and the package
//! itself.

use crate::catalog::entry::EntryId;
use crate::core::error::DomainError;
use crate::costing::aggregation::ServiceType;
use crate::costing::cost_sheet::{CostInputs, RateParams};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Traveller counts on a quotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaxCounts {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl PaxCounts {
    pub fn new(adults: u32, children: u32, infants: u32) -> Self {
        Self {
            adults,
            children,
            infants,
        }
    }

    /// Adults used as the per-person divisor. Zero or unset bills as one.
    pub fn billable_adults(&self) -> u32 {
        self.adults.max(1)
    }

    pub fn total(&self) -> u32 {
        self.adults + self.children + self.infants
    }
}

/// One costed service on a specific day of the trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLine {
    /// 1-based day number within the trip.
    pub day: u32,
    pub service_type: ServiceType,
    pub description: String,
    pub cost: f64,
}

impl ServiceLine {
    pub fn new(
        day: u32,
        service_type: ServiceType,
        description: impl Into<String>,
        cost: f64,
    ) -> Self {
        Self {
            day,
            service_type,
            description: description.into(),
            cost,
        }
    }
}

/// Lifecycle state of a quotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuotationStatus {
    #[default]
    Draft,
    Confirmed,
    Cancelled,
}

impl std::fmt::Display for QuotationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuotationStatus::Draft => write!(f, "Draft"),
            QuotationStatus::Confirmed => write!(f, "Confirmed"),
            QuotationStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// A quotation/package under construction.
///
/// Holds the client metadata, the per-day service lines, the direct escort
/// and permit costs that have no service type, and the rate parameters the
/// cascade will apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    pub id: EntryId,
    pub client_name: String,
    pub market_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub pax: PaxCounts,
    pub lines: Vec<ServiceLine>,
    pub escort_cost: f64,
    pub permit_cost: f64,
    pub rates: RateParams,
    pub status: QuotationStatus,
}

impl Quotation {
    pub fn new(id: impl Into<EntryId>, client_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            client_name: client_name.into(),
            market_type: None,
            start_date: None,
            end_date: None,
            pax: PaxCounts::default(),
            lines: Vec::new(),
            escort_cost: 0.0,
            permit_cost: 0.0,
            rates: RateParams::default(),
            status: QuotationStatus::default(),
        }
    }

    pub fn with_trip_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn with_pax(mut self, pax: PaxCounts) -> Self {
        self.pax = pax;
        self
    }

    pub fn with_rates(mut self, rates: RateParams) -> Self {
        self.rates = rates;
        self
    }

    pub fn with_market_type(mut self, market: impl Into<String>) -> Self {
        self.market_type = Some(market.into());
        self
    }

    pub fn add_line(&mut self, line: ServiceLine) {
        self.lines.push(line);
    }

    /// Trip length in nights, when both dates are set.
    pub fn nights(&self) -> Option<i64> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }

    /// Fold the service lines plus the direct escort/permit costs into the
    /// eleven-bucket cost vector for the cascade.
    pub fn cost_inputs(&self) -> CostInputs {
        let mut inputs = CostInputs::new();
        for line in &self.lines {
            inputs.add_service(line.service_type, line.cost);
        }
        inputs.escort += self.escort_cost;
        inputs.permit += self.permit_cost;
        inputs
    }

    /// Presence checks mirroring the quotation form: a client name and, if
    /// both dates are present, a non-inverted range.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.client_name.trim().is_empty() {
            return Err(DomainError::missing_name("quotation client"));
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && end < start
        {
            return Err(DomainError::InvalidQuotation(format!(
                "trip ends {} before it starts {}",
                end, start
            )));
        }
        Ok(())
    }
}
