//! Pure cost computation over a meter's readings.
//!
//! Readings are instantaneous loads in kW. The cost of a series under a plan is
//! the total cost of its average load over the observed period:
//!
//! ```text
//! cost = mean(reading_i * plan.price_at(time_i)) * elapsed_hours
//! ```
//!
//! Peak multipliers are applied per reading, by that reading's weekday, before
//! averaging. A plan without multipliers therefore costs
//! `average_consumption * elapsed_hours * unit_rate`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{ElectricityReading, PricePlan};
use crate::error::{Error, Result};

pub const COST_DECIMAL_PLACES: u32 = 3;

const SECONDS_PER_HOUR: i64 = 3600;
const NANOS_SCALE: u32 = 9;

fn mean<I>(mut values: I) -> Result<Decimal>
where
    I: ExactSizeIterator<Item = Decimal>,
{
    let count = values.len();
    if count == 0 {
        return Err(Error::EmptySeries);
    }

    let total = values.try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v).ok_or(Error::Overflow))?;
    Ok(total / Decimal::from(count))
}

/// Arithmetic mean of the reading amounts.
pub fn average_consumption(readings: &[ElectricityReading]) -> Result<Decimal> {
    mean(readings.iter().map(|r| r.reading))
}

/// Hours between the earliest and latest reading, whatever order they were stored in.
pub fn elapsed_hours(readings: &[ElectricityReading]) -> Result<Decimal> {
    let first = readings.iter().map(|r| r.time).min().ok_or(Error::EmptySeries)?;
    let last = readings.iter().map(|r| r.time).max().ok_or(Error::EmptySeries)?;

    let elapsed = last - first;
    if elapsed.is_zero() {
        return Err(Error::ZeroElapsedTime);
    }

    // Any span between two valid timestamps fits well inside 96 bits of nanoseconds.
    let seconds = Decimal::from_i128_with_scale(elapsed.whole_nanoseconds(), NANOS_SCALE);
    Ok(seconds / Decimal::from(SECONDS_PER_HOUR))
}

/// Cost of `readings` under `plan`, rounded to three places, midpoint away from zero.
pub fn cost(readings: &[ElectricityReading], plan: &PricePlan) -> Result<Decimal> {
    let hours = elapsed_hours(readings)?;
    let priced = readings
        .iter()
        .map(|r| r.reading.checked_mul(plan.price_at(r.time)?).ok_or(Error::Overflow))
        .collect::<Result<Vec<_>>>()?;
    let priced_average = mean(priced.into_iter())?;

    let total = priced_average.checked_mul(hours).ok_or(Error::Overflow)?;
    Ok(total.round_dp_with_strategy(COST_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero))
}
