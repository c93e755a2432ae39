pub mod error;
pub mod price_plans;
pub mod readings;

use axum::{
    routing::{get, post},
    Json, Router,
};
use pricing_core::PricingService;
use serde_json::{json, Value};

pub use error::ApiError;

pub fn router(service: PricingService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/readings/store", post(readings::store))
        .route("/readings/read/:smart_meter_id", get(readings::read))
        .route("/price-plans/compare-all/:smart_meter_id", get(price_plans::compare_all))
        .route("/price-plans/recommend/:smart_meter_id", get(price_plans::recommend))
        .with_state(service)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
