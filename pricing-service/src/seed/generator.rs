use pricing_core::domain::ElectricityReading;
use rand::Rng;
use rust_decimal::Decimal;
use time::{Duration, OffsetDateTime};

const READING_INTERVAL: Duration = Duration::seconds(10);
const AMOUNT_SCALE: u32 = 4;
const AMOUNT_STEPS: i64 = 10_000;

/// `count` readings spaced ten seconds apart, oldest first, the last taken at `end`.
///
/// Amounts are uniform in [0, 1) kW with four decimal places. Fewer than `count`
/// readings come back if stepping back would pass the earliest representable timestamp.
pub fn generate_readings<R: Rng>(rng: &mut R, end: OffsetDateTime, count: usize) -> Vec<ElectricityReading> {
    let mut readings = Vec::with_capacity(count);
    let mut time = Some(end);
    while let Some(at) = time.filter(|_| readings.len() < count) {
        let amount = Decimal::new(rng.gen_range(0..AMOUNT_STEPS), AMOUNT_SCALE);
        readings.push(ElectricityReading::new(at, amount));
        time = at.checked_sub(READING_INTERVAL);
    }

    readings.reverse();
    readings
}
