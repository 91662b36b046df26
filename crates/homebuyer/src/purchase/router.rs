use axum::{
    extract::{rejection::JsonRejection, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::calculator::{compute, ScheduleSummary};
use super::domain::{Jurisdiction, PurchaseInput};
use super::guarantee::PriceCaps;
use super::jurisdictions::InputProfile;

/// Listing entry describing the rules loaded for one jurisdiction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JurisdictionSummary {
    pub code: &'static str,
    pub name: &'static str,
    pub schedule: ScheduleSummary,
    pub inputs: InputProfile,
    pub guarantee_caps: PriceCaps,
}

impl From<Jurisdiction> for JurisdictionSummary {
    fn from(jurisdiction: Jurisdiction) -> Self {
        Self {
            code: jurisdiction.code(),
            name: jurisdiction.name(),
            schedule: ScheduleSummary::from(jurisdiction),
            inputs: jurisdiction.input_profile(),
            guarantee_caps: jurisdiction.guarantee_price_caps(),
        }
    }
}

/// Router exposing the estimate engine and the jurisdiction catalogue.
pub fn estimate_router() -> Router {
    Router::new()
        .route("/api/v1/estimates", post(estimate_handler))
        .route("/api/v1/jurisdictions", get(list_jurisdictions_handler))
        .route("/api/v1/jurisdictions/:code", get(jurisdiction_handler))
}

pub(crate) async fn estimate_handler(
    payload: Result<Json<PurchaseInput>, JsonRejection>,
) -> Response {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            let payload = json!({
                "error": rejection.body_text(),
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match compute(&input) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn list_jurisdictions_handler() -> Json<Vec<JurisdictionSummary>> {
    Json(
        Jurisdiction::ALL
            .into_iter()
            .map(JurisdictionSummary::from)
            .collect(),
    )
}

pub(crate) async fn jurisdiction_handler(Path(code): Path<String>) -> Response {
    match Jurisdiction::from_code(&code) {
        Ok(jurisdiction) => {
            (StatusCode::OK, Json(JurisdictionSummary::from(jurisdiction))).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
