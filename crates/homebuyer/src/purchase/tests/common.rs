use axum::response::Response;
use serde_json::Value;

use crate::purchase::domain::{
    BuyerType, Jurisdiction, PropertyPurpose, PropertyType, PurchaseInput,
};

/// Established home bought by a local, non-first-home owner-occupier with a
/// 20% deposit.
pub(crate) fn input(state: Jurisdiction) -> PurchaseInput {
    PurchaseInput {
        state,
        property_purpose: PropertyPurpose::Home,
        property_value: 500_000.0,
        property_type: PropertyType::Established,
        is_first_home_buyer: false,
        is_foreign_purchaser: false,
        is_eligible_pensioner: false,
        children_count: 0,
        yearly_income: 100_000.0,
        deposit_savings: 100_000.0,
        loan_term: 30,
        interest_rate: 6.5,
        transaction_fees: 3_000.0,
        is_metro: true,
        buyer_type: BuyerType::Single,
        as_of: None,
    }
}

/// First-home owner-occupier with a 10% deposit.
pub(crate) fn first_home(
    state: Jurisdiction,
    property_type: PropertyType,
    value: f64,
) -> PurchaseInput {
    PurchaseInput {
        property_value: value,
        property_type,
        is_first_home_buyer: true,
        deposit_savings: value * 0.1,
        ..input(state)
    }
}

pub(crate) fn investor(state: Jurisdiction, value: f64, deposit: f64) -> PurchaseInput {
    PurchaseInput {
        property_purpose: PropertyPurpose::Investment,
        property_value: value,
        deposit_savings: deposit,
        ..input(state)
    }
}

pub(crate) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
