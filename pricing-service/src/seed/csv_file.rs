use std::{collections::BTreeMap, fs::File, io::Read, path::Path};

use csv::StringRecord;
use pricing_core::{domain::ElectricityReading, validation};
use rust_decimal::Decimal;
use time::OffsetDateTime;

use super::SeedError;

/// Readings grouped by meter, in file order within each meter.
pub type SeededReadings = BTreeMap<String, Vec<ElectricityReading>>;

/// CSV seed file of readings.
///
/// Expected header columns (by name):
/// - meter_id
/// - time (RFC3339 timestamp)
/// - reading (kW, non-negative)
pub fn load_csv_readings(path: &Path) -> Result<SeededReadings, SeedError> {
    let file = File::open(path)?;
    read_csv_readings(file)
}

pub fn read_csv_readings<R: Read>(reader: R) -> Result<SeededReadings, SeedError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| SeedError::Csv(format!("failed to read CSV headers: {e}")))?
        .clone();

    let mut seeded = SeededReadings::new();
    for result in rdr.records() {
        let record = result.map_err(|e| SeedError::Csv(format!("failed to read CSV record: {e}")))?;
        let (meter_id, reading) = record_to_reading(&record, &headers)?;
        validation::validate_reading(&reading)?;
        seeded.entry(meter_id).or_default().push(reading);
    }

    Ok(seeded)
}

fn record_to_reading(
    record: &StringRecord,
    headers: &StringRecord,
) -> Result<(String, ElectricityReading), SeedError> {
    let get = |name: &str| -> Result<&str, SeedError> {
        headers
            .iter()
            .position(|h| h == name)
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .ok_or_else(|| SeedError::Csv(format!("missing column '{name}' in CSV record")))
    };

    let meter_id = get("meter_id")?;
    if meter_id.is_empty() {
        return Err(SeedError::Csv("empty meter_id in CSV record".to_string()));
    }

    let time_str = get("time")?;
    let time = OffsetDateTime::parse(time_str, &time::format_description::well_known::Rfc3339)
        .map_err(|e| SeedError::Csv(format!("invalid time '{time_str}': {e}")))?;

    let reading_str = get("reading")?;
    let reading: Decimal = reading_str
        .parse()
        .map_err(|e| SeedError::Csv(format!("invalid reading '{reading_str}': {e}")))?;

    Ok((meter_id.to_string(), ElectricityReading::new(time, reading)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn groups_rows_by_meter_in_file_order() {
        let csv = "meter_id,time,reading\n\
                   m1,2024-01-01T00:15:00Z,0.30\n\
                   m2,2024-01-01T00:00:00Z,1\n\
                   m1,2024-01-01T00:00:00Z,0.35\n";

        let seeded = read_csv_readings(csv.as_bytes()).unwrap();

        assert_eq!(seeded.len(), 2);
        let m1 = &seeded["m1"];
        assert_eq!(m1.len(), 2);
        assert_eq!(m1[0].time, datetime!(2024-01-01 00:15:00 UTC));
        assert_eq!(m1[1].reading, Decimal::new(35, 2));
    }

    #[test]
    fn rejects_unparseable_time() {
        let csv = "meter_id,time,reading\nm1,yesterday,1\n";
        assert!(matches!(read_csv_readings(csv.as_bytes()), Err(SeedError::Csv(_))));
    }

    #[test]
    fn rejects_missing_column() {
        let csv = "meter_id,time\nm1,2024-01-01T00:00:00Z\n";
        assert!(matches!(read_csv_readings(csv.as_bytes()), Err(SeedError::Csv(_))));
    }

    #[test]
    fn rejects_negative_reading() {
        let csv = "meter_id,time,reading\nm1,2024-01-01T00:00:00Z,-2\n";
        assert!(matches!(read_csv_readings(csv.as_bytes()), Err(SeedError::Reading(_))));
    }
}
