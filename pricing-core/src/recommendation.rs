use crate::comparison::ComparisonEngine;
use crate::domain::{CostPerPlan, Recommendation};
use crate::error::{Error, Result};

/// Ranks plans from cheapest to dearest for a meter.
#[derive(Clone)]
pub struct RecommendationEngine {
    comparison: ComparisonEngine,
}

impl RecommendationEngine {
    pub fn new(comparison: ComparisonEngine) -> Self {
        Self { comparison }
    }

    pub fn recommend(&self, meter_id: &str, limit: Option<i64>) -> Result<Vec<Recommendation>> {
        let limit = limit.map(validate_limit).transpose()?;
        let costs = self.comparison.cost_per_plan(meter_id)?;
        Ok(rank(costs, limit))
    }
}

fn validate_limit(limit: i64) -> Result<usize> {
    if limit <= 0 {
        return Err(Error::InvalidLimit(limit));
    }
    usize::try_from(limit).map_err(|_| Error::InvalidLimit(limit))
}

/// Ascending by cost; equal costs keep catalog order.
pub fn rank(costs: CostPerPlan, limit: Option<usize>) -> Vec<Recommendation> {
    let mut ranked: Vec<Recommendation> = costs
        .into_entries()
        .into_iter()
        .map(Recommendation::from)
        .collect();
    ranked.sort_by(|a, b| a.cost.cmp(&b.cost));

    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{InMemoryReadingStore, PlanCatalog, ReadingStore};
    use crate::domain::{ElectricityReading, PlanCost, PricePlan, Supplier};
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use time::{macros::datetime, Duration};

    fn engine() -> RecommendationEngine {
        let store = InMemoryReadingStore::new();
        let t0 = datetime!(2024-03-04 08:00:00 UTC);
        store.append(
            "m1",
            vec![
                ElectricityReading::new(t0, Decimal::from(35)),
                ElectricityReading::new(t0 + Duration::minutes(15), Decimal::from(30)),
            ],
        );
        let plans = PlanCatalog::new(vec![
            PricePlan::new("P1", Supplier::DrEvilsDarkEnergy, Decimal::TEN),
            PricePlan::new("P2", Supplier::TheGreenEco, Decimal::from(2)),
            PricePlan::new("P3", Supplier::PowerForEveryone, Decimal::from(5)),
        ])
        .unwrap();
        RecommendationEngine::new(ComparisonEngine::new(Arc::new(store), Arc::new(plans)))
    }

    fn plan_cost(name: &str, cost: i64) -> PlanCost {
        PlanCost {
            plan_name: name.to_string(),
            cost: Decimal::from(cost),
        }
    }

    #[test]
    fn recommendations_are_sorted_ascending() {
        let ranked = engine().recommend("m1", None).unwrap();

        let names: Vec<_> = ranked.iter().map(|r| r.plan_name.as_str()).collect();
        assert_eq!(names, vec!["P2", "P3", "P1"]);
        assert!(ranked.windows(2).all(|w| w[0].cost <= w[1].cost));
    }

    #[test]
    fn limit_of_one_returns_the_cheapest_plan() {
        let ranked = engine().recommend("m1", Some(1)).unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].plan_name, "P2");
    }

    #[test]
    fn limited_result_is_a_prefix_of_the_full_ranking() {
        let engine = engine();
        let full = engine.recommend("m1", None).unwrap();

        for k in 1..=5 {
            let limited = engine.recommend("m1", Some(k)).unwrap();
            assert_eq!(limited.len(), full.len().min(k as usize));
            assert_eq!(limited[..], full[..limited.len()]);
        }
    }

    #[test]
    fn non_positive_limit_is_rejected() {
        assert_eq!(engine().recommend("m1", Some(0)), Err(Error::InvalidLimit(0)));
        assert_eq!(engine().recommend("m1", Some(-3)), Err(Error::InvalidLimit(-3)));
    }

    #[test]
    fn unknown_meter_has_no_recommendations() {
        assert!(engine().recommend("unknown", Some(2)).unwrap().is_empty());
    }

    #[test]
    fn ties_keep_catalog_order() {
        let costs: CostPerPlan = vec![plan_cost("z", 4), plan_cost("b", 1), plan_cost("a", 1)]
            .into_iter()
            .collect();

        let names: Vec<_> = rank(costs, None).into_iter().map(|r| r.plan_name).collect();
        assert_eq!(names, vec!["b", "a", "z"]);
    }
}
