use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A single instantaneous consumption sample, in kW.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectricityReading {
    #[serde(with = "time::serde::rfc3339")]
    pub time: OffsetDateTime,
    #[serde(with = "rust_decimal::serde::float")]
    pub reading: Decimal,
}

impl ElectricityReading {
    pub fn new(time: OffsetDateTime, reading: Decimal) -> Self {
        Self { time, reading }
    }
}
