use rust_decimal::Decimal;
use time::macros::datetime;

use crate::domain::ElectricityReading;
use crate::error::{Error, Result};

/// Pure validation of a store request.
///
/// Rules:
/// - meter id must be non-blank.
/// - at least one reading must be supplied.
/// - every reading must be non-negative.
/// - every timestamp must be within a broad sanity window [2000-01-01, 2100-01-01].
pub fn validate_store_request(meter_id: &str, readings: &[ElectricityReading]) -> Result<()> {
    if meter_id.trim().is_empty() {
        return Err(Error::Validation("smart meter id must not be empty".to_string()));
    }

    if readings.is_empty() {
        return Err(Error::Validation("at least one electricity reading is required".to_string()));
    }

    readings.iter().try_for_each(validate_reading)
}

pub fn validate_reading(reading: &ElectricityReading) -> Result<()> {
    if reading.reading < Decimal::ZERO {
        return Err(Error::Validation("reading must be non-negative".to_string()));
    }

    let min_ts = datetime!(2000-01-01 00:00:00 UTC);
    let max_ts = datetime!(2100-01-01 00:00:00 UTC);

    if reading.time < min_ts || reading.time > max_ts {
        return Err(Error::Validation("timestamp out of allowed range".to_string()));
    }

    Ok(())
}
