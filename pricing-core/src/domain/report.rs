use rust_decimal::Decimal;
use serde::{ser::SerializeMap, Serialize, Serializer};

/// Cost of a meter's readings under one plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCost {
    pub plan_name: String,
    pub cost: Decimal,
}

/// Costs keyed by plan name, kept in catalog order.
///
/// Serializes as a JSON object `{ "<plan name>": <cost>, ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostPerPlan {
    entries: Vec<PlanCost>,
}

impl CostPerPlan {
    pub fn get(&self, plan_name: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|e| e.plan_name == plan_name)
            .map(|e| e.cost)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlanCost> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<PlanCost> {
        self.entries
    }
}

impl FromIterator<PlanCost> for CostPerPlan {
    fn from_iter<I: IntoIterator<Item = PlanCost>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

struct AsFloat<'a>(&'a Decimal);

impl Serialize for AsFloat<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(self.0, serializer)
    }
}

impl Serialize for CostPerPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.plan_name, &AsFloat(&entry.cost))?;
        }
        map.end()
    }
}

/// Comparison of every plan for one meter, plus the plan it is contracted to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostReport {
    pub price_plan_id: Option<String>,
    pub price_plan_comparisons: CostPerPlan,
}

/// One ranked entry in a recommendation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub plan_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub cost: Decimal,
}

impl From<PlanCost> for Recommendation {
    fn from(p: PlanCost) -> Self {
        Recommendation {
            plan_name: p.plan_name,
            cost: p.cost,
        }
    }
}
