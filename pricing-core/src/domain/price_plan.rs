use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, Weekday};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Supplier {
    DrEvilsDarkEnergy,
    TheGreenEco,
    PowerForEveryone,
}

/// Scales a plan's unit rate on one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakTimeMultiplier {
    pub day_of_week: Weekday,
    pub multiplier: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricePlan {
    pub plan_name: String,
    pub supplier: Supplier,
    pub unit_rate: Decimal,
    pub peak_time_multipliers: Vec<PeakTimeMultiplier>,
}

impl PricePlan {
    pub fn new(plan_name: impl Into<String>, supplier: Supplier, unit_rate: Decimal) -> Self {
        Self {
            plan_name: plan_name.into(),
            supplier,
            unit_rate,
            peak_time_multipliers: Vec::new(),
        }
    }

    pub fn with_multiplier(mut self, day_of_week: Weekday, multiplier: Decimal) -> Self {
        self.peak_time_multipliers.push(PeakTimeMultiplier {
            day_of_week,
            multiplier,
        });
        self
    }

    pub fn multiplier_for(&self, day: Weekday) -> Option<Decimal> {
        self.peak_time_multipliers
            .iter()
            .find(|m| m.day_of_week == day)
            .map(|m| m.multiplier)
    }

    /// Rate per kWh in effect at `at`, judged by the weekday in `at`'s own offset.
    pub fn price_at(&self, at: OffsetDateTime) -> Result<Decimal> {
        match self.multiplier_for(at.weekday()) {
            Some(multiplier) => self.unit_rate.checked_mul(multiplier).ok_or(Error::Overflow),
            None => Ok(self.unit_rate),
        }
    }
}
