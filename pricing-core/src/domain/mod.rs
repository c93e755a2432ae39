pub mod electricity_reading;
pub mod price_plan;
pub mod report;

pub use electricity_reading::ElectricityReading;
pub use price_plan::{PeakTimeMultiplier, PricePlan, Supplier};
pub use report::{CostPerPlan, CostReport, PlanCost, Recommendation};
