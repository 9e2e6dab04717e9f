//! Supplier tariffs: priced rates valid over a date range.

use crate::catalog::entry::EntryId;
use crate::core::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A supplier's priced rate for a service, valid over an inclusive
/// date range.
///
/// Tariffs are CRUD data consumed by the quotation builder when picking
/// rates; they take no part in the costing arithmetic itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    pub id: EntryId,
    /// The catalog entry this rate belongs to (hotel, guide, vehicle, ...).
    pub service_id: EntryId,
    pub rate: f64,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
}

impl Tariff {
    pub fn new(
        id: impl Into<EntryId>,
        service_id: impl Into<EntryId>,
        rate: f64,
        valid_from: NaiveDate,
        valid_to: NaiveDate,
    ) -> Result<Self, DomainError> {
        if valid_to < valid_from {
            return Err(DomainError::InvalidDateRange(format!(
                "valid_to {} precedes valid_from {}",
                valid_to, valid_from
            )));
        }
        Ok(Self {
            id: id.into(),
            service_id: service_id.into(),
            rate,
            valid_from,
            valid_to,
        })
    }

    /// Whether the tariff covers `date` (both endpoints inclusive).
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.valid_from <= date && date <= self.valid_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inclusive_range() {
        let tariff = Tariff::new(
            "trf-001",
            "htl-001",
            120.0,
            date(2026, 10, 1),
            date(2027, 3, 31),
        )
        .unwrap();

        assert!(tariff.is_valid_on(date(2026, 10, 1)));
        assert!(tariff.is_valid_on(date(2027, 3, 31)));
        assert!(tariff.is_valid_on(date(2026, 12, 25)));
        assert!(!tariff.is_valid_on(date(2026, 9, 30)));
        assert!(!tariff.is_valid_on(date(2027, 4, 1)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = Tariff::new(
            "trf-002",
            "htl-001",
            120.0,
            date(2027, 1, 1),
            date(2026, 1, 1),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_single_day_tariff() {
        let day = date(2026, 11, 14);
        let tariff = Tariff::new("trf-003", "gde-001", 45.0, day, day).unwrap();
        assert!(tariff.is_valid_on(day));
        assert!(!tariff.is_valid_on(date(2026, 11, 15)));
    }
}
