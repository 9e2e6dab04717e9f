//! Seed data: the sample master records every fresh session starts with.
//!
//! These stand in for the mock arrays the back office shipped with. They
//! are deliberately small; the console is expected to grow and lose state
//! within one session.

use crate::stores::memory::InMemoryStore;
use chrono::NaiveDate;
use tourdesk_domain::{
    AdditionalRequirement, AgencyProfile, Amenity, Bank, BillingInstruction, CatalogEntry,
    Currency, Division, EmergencyContact, EnrouteService, FleetVehicle, Flight, Guide, Hotel,
    MarketType, TaxRate, Tariff,
};

fn store_of<T: CatalogEntry + Clone>(entries: Vec<T>) -> InMemoryStore<T> {
    InMemoryStore::seeded(entries.into_iter().map(|e| (e.id().clone(), e)))
}

pub fn hotels() -> InMemoryStore<Hotel> {
    store_of(vec![
        Hotel::new("htl-001", "Taj Lake Palace", "Udaipur")
            .with_star_rating(5)
            .with_amenity("amn-001")
            .with_amenity("amn-002"),
        Hotel::new("htl-002", "Samode Haveli", "Jaipur").with_star_rating(4),
        Hotel::new("htl-003", "The Imperial", "New Delhi").with_star_rating(5),
    ])
}

pub fn flights() -> InMemoryStore<Flight> {
    store_of(vec![
        Flight::new("flt-001", "AI 433", "Air India", "DEL-UDR"),
        Flight::new("flt-002", "6E 204", "IndiGo", "JAI-BOM").with_class("Economy"),
    ])
}

pub fn fleet() -> InMemoryStore<FleetVehicle> {
    store_of(vec![
        FleetVehicle::new("flv-001", "Innova Crysta", "SUV", 6),
        FleetVehicle::new("flv-002", "Tempo Traveller", "Minibus", 12),
    ])
}

pub fn guides() -> InMemoryStore<Guide> {
    store_of(vec![
        Guide::new("gde-001", "R. Sharma", 45.0)
            .with_language("English")
            .with_language("French"),
        Guide::new("gde-002", "A. Khan", 40.0).with_language("German"),
    ])
}

pub fn amenities() -> InMemoryStore<Amenity> {
    store_of(vec![
        Amenity::new("amn-001", "Pool"),
        Amenity::new("amn-002", "Spa"),
        Amenity::new("amn-003", "Airport Shuttle"),
    ])
}

pub fn enroute_services() -> InMemoryStore<EnrouteService> {
    store_of(vec![
        EnrouteService::new("enr-001", "Midway Lunch Halt", "Jaipur-Udaipur", 18.0),
        EnrouteService::new("enr-002", "Highway Rest House", "Delhi-Jaipur", 12.0),
    ])
}

pub fn requirements() -> InMemoryStore<AdditionalRequirement> {
    store_of(vec![
        AdditionalRequirement::new("req-001", "Visa support letter", 10.0),
        AdditionalRequirement::new("req-002", "Wheelchair assistance", 0.0),
    ])
}

pub fn billing_instructions() -> InMemoryStore<BillingInstruction> {
    store_of(vec![
        BillingInstruction::new("bil-001", "Acme Tours GmbH", "Invoice in EUR, net 30")
            .with_currency("cur-eur"),
    ])
}

pub fn profiles() -> InMemoryStore<AgencyProfile> {
    store_of(vec![
        AgencyProfile::new("agp-001", "Tourdesk Travels", "12 MI Road, Jaipur")
            .with_gst_number("08AAACT1234F1Z5"),
    ])
}

pub fn banks() -> InMemoryStore<Bank> {
    store_of(vec![
        Bank::new("bnk-001", "State Bank of India", "Connaught Place", "00123456789")
            .with_swift("SBININBB"),
    ])
}

pub fn currencies() -> InMemoryStore<Currency> {
    store_of(vec![
        Currency::new("cur-inr", "INR", "₹", 1.0),
        Currency::new("cur-usd", "USD", "$", 83.2),
        Currency::new("cur-eur", "EUR", "€", 90.5),
    ])
}

pub fn tax_rates() -> InMemoryStore<TaxRate> {
    store_of(vec![
        TaxRate::new("tax-005", "GST 5", 5.0),
        TaxRate::new("tax-018", "GST 18", 18.0),
    ])
}

pub fn divisions() -> InMemoryStore<Division> {
    store_of(vec![
        Division::new("div-001", "Inbound").with_head("R. Mehta"),
        Division::new("div-002", "Domestic"),
    ])
}

pub fn market_types() -> InMemoryStore<MarketType> {
    store_of(vec![
        MarketType::new("mkt-001", "Inbound Europe"),
        MarketType::new("mkt-002", "Domestic"),
    ])
}

pub fn emergency_contacts() -> InMemoryStore<EmergencyContact> {
    store_of(vec![
        EmergencyContact::new("emc-001", "Duty Manager", "+91-98100-00000")
            .with_region("Rajasthan"),
    ])
}

/// Sample tariffs covering the 2026-27 season.
pub fn tariffs() -> InMemoryStore<Tariff> {
    let from = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap_or_default();
    let to = NaiveDate::from_ymd_opt(2027, 3, 31).unwrap_or_default();
    let entries = [
        Tariff::new("trf-001", "htl-001", 320.0, from, to),
        Tariff::new("trf-002", "htl-002", 140.0, from, to),
        Tariff::new("trf-003", "gde-001", 45.0, from, to),
    ];
    InMemoryStore::seeded(
        entries
            .into_iter()
            .flatten()
            .map(|t| (t.id.clone(), t)),
    )
}
