use std::collections::HashSet;

use crate::domain::PricePlan;
use crate::error::{Error, Result};

/// The price plans on offer, fixed once built.
#[derive(Debug, Clone, Default)]
pub struct PlanCatalog {
    plans: Vec<PricePlan>,
}

impl PlanCatalog {
    /// Builds a catalog, rejecting duplicate or empty plan names,
    /// non-positive rates and multipliers, and repeated weekdays within a plan.
    pub fn new(plans: Vec<PricePlan>) -> Result<Self> {
        let mut names = HashSet::new();
        for plan in &plans {
            validate_plan(plan)?;
            if !names.insert(plan.plan_name.as_str()) {
                return Err(Error::Validation(format!(
                    "duplicate price plan '{}'",
                    plan.plan_name
                )));
            }
        }

        Ok(Self { plans })
    }

    pub fn all_plans(&self) -> &[PricePlan] {
        &self.plans
    }

    pub fn plan(&self, plan_name: &str) -> Option<&PricePlan> {
        self.plans.iter().find(|p| p.plan_name == plan_name)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

fn validate_plan(plan: &PricePlan) -> Result<()> {
    if plan.plan_name.trim().is_empty() {
        return Err(Error::Validation("price plan name must not be empty".to_string()));
    }

    if plan.unit_rate <= rust_decimal::Decimal::ZERO {
        return Err(Error::Validation(format!(
            "price plan '{}' must have a positive unit rate",
            plan.plan_name
        )));
    }

    let mut days = HashSet::new();
    for m in &plan.peak_time_multipliers {
        if m.multiplier <= rust_decimal::Decimal::ZERO {
            return Err(Error::Validation(format!(
                "price plan '{}' has a non-positive multiplier for {}",
                plan.plan_name, m.day_of_week
            )));
        }
        if !days.insert(m.day_of_week) {
            return Err(Error::Validation(format!(
                "price plan '{}' has more than one multiplier for {}",
                plan.plan_name, m.day_of_week
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Supplier;
    use rust_decimal::Decimal;
    use time::Weekday;

    fn plan(name: &str, rate: i64) -> PricePlan {
        PricePlan::new(name, Supplier::PowerForEveryone, Decimal::from(rate))
    }

    #[test]
    fn keeps_plans_in_construction_order() {
        let catalog = PlanCatalog::new(vec![plan("b", 1), plan("a", 2)]).unwrap();

        let names: Vec<_> = catalog.all_plans().iter().map(|p| p.plan_name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(catalog.plan("a").map(|p| p.unit_rate), Some(Decimal::from(2)));
        assert!(catalog.plan("missing").is_none());
    }

    #[test]
    fn rejects_duplicate_names() {
        let res = PlanCatalog::new(vec![plan("a", 1), plan("a", 2)]);
        assert!(matches!(res, Err(Error::Validation(_))));
    }

    #[test]
    fn rejects_non_positive_rate() {
        let res = PlanCatalog::new(vec![plan("free", 0)]);
        assert!(matches!(res, Err(Error::Validation(_))));
    }

    #[test]
    fn rejects_repeated_weekday_multiplier() {
        let p = plan("a", 1)
            .with_multiplier(Weekday::Friday, Decimal::from(2))
            .with_multiplier(Weekday::Friday, Decimal::TEN);
        assert!(matches!(PlanCatalog::new(vec![p]), Err(Error::Validation(_))));
    }

    #[test]
    fn rejects_non_positive_multiplier() {
        let p = plan("a", 1).with_multiplier(Weekday::Sunday, Decimal::ZERO);
        assert!(matches!(PlanCatalog::new(vec![p]), Err(Error::Validation(_))));
    }
}
