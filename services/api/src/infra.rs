use chrono::NaiveDate;
use homebuyer::purchase::{BuyerType, Jurisdiction, PropertyPurpose, PropertyType};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_jurisdiction(raw: &str) -> Result<Jurisdiction, String> {
    Jurisdiction::from_code(raw).map_err(|err| err.to_string())
}

pub(crate) fn parse_purpose(raw: &str) -> Result<PropertyPurpose, String> {
    match normalize(raw).as_str() {
        "home" | "owner_occupier" => Ok(PropertyPurpose::Home),
        "investment" | "investor" => Ok(PropertyPurpose::Investment),
        _ => Err(format!("'{raw}' is not a property purpose (home, investment)")),
    }
}

pub(crate) fn parse_property_type(raw: &str) -> Result<PropertyType, String> {
    match normalize(raw).as_str() {
        "established" => Ok(PropertyType::Established),
        "newly_constructed" | "new" => Ok(PropertyType::NewlyConstructed),
        "vacant_land" | "land" => Ok(PropertyType::VacantLand),
        _ => Err(format!(
            "'{raw}' is not a property type (established, newly-constructed, vacant-land)"
        )),
    }
}

pub(crate) fn parse_buyer_type(raw: &str) -> Result<BuyerType, String> {
    match normalize(raw).as_str() {
        "single" => Ok(BuyerType::Single),
        "couple" => Ok(BuyerType::Couple),
        _ => Err(format!("'{raw}' is not a buyer type (single, couple)")),
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}
