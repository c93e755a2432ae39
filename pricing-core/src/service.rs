//! The operations the request layer calls into.

use std::sync::Arc;

use crate::comparison::ComparisonEngine;
use crate::db::{AccountDirectory, PlanCatalog, ReadingStore};
use crate::domain::{CostPerPlan, CostReport, ElectricityReading, Recommendation};
use crate::error::Result;
use crate::recommendation::RecommendationEngine;
use crate::validation;

#[derive(Clone)]
pub struct PricingService {
    readings: Arc<dyn ReadingStore>,
    accounts: Arc<AccountDirectory>,
    comparison: ComparisonEngine,
    recommendation: RecommendationEngine,
}

impl PricingService {
    pub fn new(
        readings: Arc<dyn ReadingStore>,
        plans: Arc<PlanCatalog>,
        accounts: Arc<AccountDirectory>,
    ) -> Self {
        let comparison = ComparisonEngine::new(Arc::clone(&readings), plans);
        let recommendation = RecommendationEngine::new(comparison.clone());
        Self {
            readings,
            accounts,
            comparison,
            recommendation,
        }
    }

    pub fn store_readings(&self, meter_id: &str, readings: Vec<ElectricityReading>) -> Result<()> {
        validation::validate_store_request(meter_id, &readings)?;
        self.readings.append(meter_id, readings);
        Ok(())
    }

    pub fn get_readings(&self, meter_id: &str) -> Vec<ElectricityReading> {
        self.readings.fetch(meter_id)
    }

    pub fn get_cost_per_plan(&self, meter_id: &str) -> Result<CostPerPlan> {
        self.comparison.cost_per_plan(meter_id)
    }

    pub fn get_recommendations(
        &self,
        meter_id: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Recommendation>> {
        self.recommendation.recommend(meter_id, limit)
    }

    pub fn get_contracted_plan(&self, meter_id: &str) -> Option<String> {
        self.accounts.plan_for(meter_id).map(str::to_string)
    }

    /// Cost per plan together with the meter's contracted plan.
    pub fn cost_report(&self, meter_id: &str) -> Result<CostReport> {
        Ok(CostReport {
            price_plan_id: self.get_contracted_plan(meter_id),
            price_plan_comparisons: self.get_cost_per_plan(meter_id)?,
        })
    }
}
