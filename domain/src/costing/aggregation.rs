//! Aggregation of per-day service costs into the cost buckets.
//!
//! Every service record lands in exactly one bucket via a fixed mapping;
//! nothing is dropped and nothing is double-counted. Unrecognized service
//! types fall into the misc bucket rather than erroring, matching the
//! lenient intake the quotation builder always had.

use crate::costing::cost_sheet::CostInputs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed enumeration of per-day service types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    Hotel,
    Transfer,
    Tpt,
    Train,
    Flight,
    Guide,
    Activity,
    Monument,
    Restaurant,
    Enroute,
    Additional,
    Other,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Hotel => "Hotel",
            ServiceType::Transfer => "Transfer",
            ServiceType::Tpt => "TPT",
            ServiceType::Train => "Train",
            ServiceType::Flight => "Flight",
            ServiceType::Guide => "Guide",
            ServiceType::Activity => "Activity",
            ServiceType::Monument => "Monument",
            ServiceType::Restaurant => "Restaurant",
            ServiceType::Enroute => "Enroute",
            ServiceType::Additional => "Additional",
            ServiceType::Other => "Other",
        }
    }

    /// All concrete types, in intake order.
    pub fn all() -> &'static [ServiceType] {
        &[
            ServiceType::Hotel,
            ServiceType::Transfer,
            ServiceType::Tpt,
            ServiceType::Train,
            ServiceType::Flight,
            ServiceType::Guide,
            ServiceType::Activity,
            ServiceType::Monument,
            ServiceType::Restaurant,
            ServiceType::Enroute,
            ServiceType::Additional,
            ServiceType::Other,
        ]
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = std::convert::Infallible;

    /// Lenient parse: case-insensitive, with unknown strings mapping to
    /// [`ServiceType::Other`] (and therefore the misc bucket).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "hotel" => ServiceType::Hotel,
            "transfer" => ServiceType::Transfer,
            "tpt" => ServiceType::Tpt,
            "train" => ServiceType::Train,
            "flight" => ServiceType::Flight,
            "guide" => ServiceType::Guide,
            "activity" => ServiceType::Activity,
            "monument" => ServiceType::Monument,
            "restaurant" | "meal" => ServiceType::Restaurant,
            "enroute" => ServiceType::Enroute,
            "additional" => ServiceType::Additional,
            _ => ServiceType::Other,
        })
    }
}

/// One typed service cost record, the unit of aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCost {
    pub service_type: ServiceType,
    pub cost: f64,
}

impl ServiceCost {
    pub fn new(service_type: ServiceType, cost: f64) -> Self {
        Self { service_type, cost }
    }
}

impl CostInputs {
    /// Add one service cost to its bucket.
    ///
    /// `Transfer`, `TPT`, and `Train` share the transport bucket;
    /// `Restaurant` feeds the meal bucket; `Additional` and `Other` feed
    /// misc. Escort and permit costs have no service type and are set on
    /// the inputs directly.
    pub fn add_service(&mut self, service_type: ServiceType, cost: f64) {
        match service_type {
            ServiceType::Hotel => self.hotel += cost,
            ServiceType::Transfer | ServiceType::Tpt | ServiceType::Train => {
                self.transport += cost
            }
            ServiceType::Flight => self.flight += cost,
            ServiceType::Guide => self.guide += cost,
            ServiceType::Activity => self.activity += cost,
            ServiceType::Monument => self.monument += cost,
            ServiceType::Restaurant => self.meal += cost,
            ServiceType::Enroute => self.enroute += cost,
            ServiceType::Additional | ServiceType::Other => self.misc += cost,
        }
    }

    /// Fold a collection of service records into the bucket vector.
    ///
    /// An empty input yields the all-zero vector.
    pub fn from_services<'a, I>(services: I) -> Self
    where
        I: IntoIterator<Item = &'a ServiceCost>,
    {
        let mut inputs = CostInputs::new();
        for service in services {
            inputs.add_service(service.service_type, service.cost);
        }
        inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yields_zero_vector() {
        let inputs = CostInputs::from_services(&[]);
        assert_eq!(inputs, CostInputs::new());
        assert_eq!(inputs.total(), 0.0);
    }

    #[test]
    fn test_transport_variants_share_bucket() {
        let services = vec![
            ServiceCost::new(ServiceType::Transfer, 100.0),
            ServiceCost::new(ServiceType::Tpt, 50.0),
            ServiceCost::new(ServiceType::Train, 25.0),
        ];
        let inputs = CostInputs::from_services(&services);
        assert_eq!(inputs.transport, 175.0);
        assert_eq!(inputs.total(), 175.0);
    }

    #[test]
    fn test_misc_collects_additional_and_other() {
        let services = vec![
            ServiceCost::new(ServiceType::Additional, 30.0),
            ServiceCost::new(ServiceType::Other, 20.0),
        ];
        let inputs = CostInputs::from_services(&services);
        assert_eq!(inputs.misc, 50.0);
    }

    #[test]
    fn test_restaurant_feeds_meal_bucket() {
        let services = vec![ServiceCost::new(ServiceType::Restaurant, 80.0)];
        let inputs = CostInputs::from_services(&services);
        assert_eq!(inputs.meal, 80.0);
    }

    #[test]
    fn test_completeness_no_record_lost() {
        let services: Vec<ServiceCost> = ServiceType::all()
            .iter()
            .enumerate()
            .map(|(i, &t)| ServiceCost::new(t, (i + 1) as f64 * 10.0))
            .collect();
        let original_total: f64 = services.iter().map(|s| s.cost).sum();
        let inputs = CostInputs::from_services(&services);
        assert_eq!(inputs.total(), original_total);
    }

    #[test]
    fn test_from_str_known_types() {
        assert_eq!("Hotel".parse::<ServiceType>().unwrap(), ServiceType::Hotel);
        assert_eq!("tpt".parse::<ServiceType>().unwrap(), ServiceType::Tpt);
        assert_eq!(
            "RESTAURANT".parse::<ServiceType>().unwrap(),
            ServiceType::Restaurant
        );
        assert_eq!(
            "meal".parse::<ServiceType>().unwrap(),
            ServiceType::Restaurant
        );
    }

    #[test]
    fn test_from_str_unknown_falls_to_other() {
        assert_eq!(
            "helicopter".parse::<ServiceType>().unwrap(),
            ServiceType::Other
        );
        assert_eq!("".parse::<ServiceType>().unwrap(), ServiceType::Other);
    }

    #[test]
    fn test_unknown_type_lands_in_misc() {
        let t: ServiceType = "camel-ride".parse().unwrap();
        let inputs = CostInputs::from_services(&[ServiceCost::new(t, 60.0)]);
        assert_eq!(inputs.misc, 60.0);
    }
}
