use std::sync::Arc;

use crate::cost;
use crate::db::{PlanCatalog, ReadingStore};
use crate::domain::{CostPerPlan, PlanCost};
use crate::error::Result;

/// Prices one meter's readings under every plan in the catalog.
#[derive(Clone)]
pub struct ComparisonEngine {
    readings: Arc<dyn ReadingStore>,
    plans: Arc<PlanCatalog>,
}

impl ComparisonEngine {
    pub fn new(readings: Arc<dyn ReadingStore>, plans: Arc<PlanCatalog>) -> Self {
        Self { readings, plans }
    }

    /// One entry per catalog plan, in catalog order.
    ///
    /// A meter with no readings yields an empty mapping rather than an error;
    /// callers treat that as "meter unknown or has no data".
    pub fn cost_per_plan(&self, meter_id: &str) -> Result<CostPerPlan> {
        let readings = self.readings.fetch(meter_id);
        if readings.is_empty() {
            tracing::debug!(meter_id, "no readings for meter");
            return Ok(CostPerPlan::default());
        }

        let costs = self
            .plans
            .all_plans()
            .iter()
            .map(|plan| {
                Ok(PlanCost {
                    plan_name: plan.plan_name.clone(),
                    cost: cost::cost(&readings, plan)?,
                })
            })
            .collect::<Result<CostPerPlan>>()?;

        tracing::debug!(
            meter_id,
            readings = readings.len(),
            plans = costs.len(),
            "costs computed"
        );

        Ok(costs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryReadingStore;
    use crate::domain::{ElectricityReading, PricePlan, Supplier};
    use crate::error::Error;
    use rust_decimal::Decimal;
    use time::{macros::datetime, Duration};

    fn engine_with(readings: Vec<ElectricityReading>) -> ComparisonEngine {
        let store = InMemoryReadingStore::new();
        if !readings.is_empty() {
            store.append("m1", readings);
        }
        let plans = PlanCatalog::new(vec![
            PricePlan::new("P1", Supplier::DrEvilsDarkEnergy, Decimal::TEN),
            PricePlan::new("P2", Supplier::TheGreenEco, Decimal::from(2)),
            PricePlan::new("P3", Supplier::PowerForEveryone, Decimal::ONE),
        ])
        .unwrap();
        ComparisonEngine::new(Arc::new(store), Arc::new(plans))
    }

    fn scenario_readings() -> Vec<ElectricityReading> {
        let t0 = datetime!(2024-03-04 08:00:00 UTC);
        vec![
            ElectricityReading::new(t0, Decimal::from(35)),
            ElectricityReading::new(t0 + Duration::minutes(15), Decimal::from(30)),
        ]
    }

    #[test]
    fn returns_one_entry_per_plan_in_catalog_order() {
        let costs = engine_with(scenario_readings()).cost_per_plan("m1").unwrap();

        assert_eq!(costs.len(), 3);
        let names: Vec<_> = costs.iter().map(|c| c.plan_name.as_str()).collect();
        assert_eq!(names, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn higher_rate_plan_costs_more() {
        let costs = engine_with(scenario_readings()).cost_per_plan("m1").unwrap();

        assert!(costs.get("P1").unwrap() > costs.get("P2").unwrap());
        assert_eq!(costs.get("P2"), Some(Decimal::new(16250, 3)));
    }

    #[test]
    fn unknown_meter_yields_empty_mapping() {
        let costs = engine_with(scenario_readings()).cost_per_plan("unknown").unwrap();
        assert!(costs.is_empty());
    }

    #[test]
    fn degenerate_series_is_reported_not_divided() {
        let single = vec![ElectricityReading::new(datetime!(2024-03-04 08:00:00 UTC), Decimal::ONE)];
        assert_eq!(engine_with(single).cost_per_plan("m1"), Err(Error::ZeroElapsedTime));
    }
}
