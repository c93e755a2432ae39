use axum::{
    extract::{Path, State},
    Json,
};
use pricing_core::{domain::ElectricityReading, PricingService};
use serde::Deserialize;
use serde_json::{json, Value};

use super::ApiError;

/// Body of a store request. Both fields are optional on the wire so that a
/// missing field is reported as a validation error rather than a parse error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterReadings {
    pub smart_meter_id: Option<String>,
    pub electricity_readings: Option<Vec<ElectricityReading>>,
}

pub async fn store(
    State(service): State<PricingService>,
    Json(payload): Json<MeterReadings>,
) -> Result<Json<Value>, ApiError> {
    let meter_id = payload.smart_meter_id.unwrap_or_default();
    let readings = payload.electricity_readings.unwrap_or_default();
    let count = readings.len();

    if let Err(e) = service.store_readings(&meter_id, readings) {
        metrics::counter!("http_store_rejected_total").increment(1);
        return Err(e.into());
    }

    metrics::counter!("http_readings_stored_total").increment(count as u64);
    tracing::info!(meter_id = %meter_id, readings = count, "readings stored");
    Ok(Json(json!({})))
}

pub async fn read(
    State(service): State<PricingService>,
    Path(smart_meter_id): Path<String>,
) -> Json<Vec<ElectricityReading>> {
    Json(service.get_readings(&smart_meter_id))
}
