use axum::{
    extract::{Path, Query, State},
    Json,
};
use pricing_core::{
    domain::{CostReport, Recommendation},
    PricingService,
};
use serde::Deserialize;

use super::ApiError;

pub async fn compare_all(
    State(service): State<PricingService>,
    Path(smart_meter_id): Path<String>,
) -> Result<Json<CostReport>, ApiError> {
    metrics::counter!("http_comparisons_total").increment(1);

    let report = service.cost_report(&smart_meter_id)?;
    if report.price_plan_comparisons.is_empty() {
        return Err(ApiError::MeterNotFound(smart_meter_id));
    }
    Ok(Json(report))
}

/// `limit` is parsed by hand so a malformed value gets the same JSON error body
/// as every other rejection.
#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub limit: Option<String>,
}

impl RecommendQuery {
    fn limit(&self) -> Result<Option<i64>, ApiError> {
        self.limit
            .as_deref()
            .map(|raw| {
                raw.trim()
                    .parse::<i64>()
                    .map_err(|_| ApiError::BadRequest(format!("invalid limit '{raw}': must be an integer")))
            })
            .transpose()
    }
}

pub async fn recommend(
    State(service): State<PricingService>,
    Path(smart_meter_id): Path<String>,
    Query(query): Query<RecommendQuery>,
) -> Result<Json<Vec<Recommendation>>, ApiError> {
    metrics::counter!("http_recommendations_total").increment(1);

    let limit = query.limit()?;
    let recommendations = service.get_recommendations(&smart_meter_id, limit)?;
    if recommendations.is_empty() {
        return Err(ApiError::MeterNotFound(smart_meter_id));
    }
    Ok(Json(recommendations))
}
