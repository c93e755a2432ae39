use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError, RwLock},
};

use crate::domain::ElectricityReading;

/// Append-only, per-meter storage of readings.
pub trait ReadingStore: Send + Sync {
    /// Appends `readings` to the meter's series in call order, creating the
    /// series on first use. One call is never interleaved with another call
    /// for the same meter.
    fn append(&self, meter_id: &str, readings: Vec<ElectricityReading>);

    /// Snapshot of the meter's readings in insertion order; empty for an
    /// unknown meter.
    fn fetch(&self, meter_id: &str) -> Vec<ElectricityReading>;

    fn meter_ids(&self) -> Vec<String>;
}

type Series = Arc<Mutex<Vec<ElectricityReading>>>;

/// Process-lifetime store: an outer map lock taken briefly to find a meter,
/// and one mutex per meter series.
#[derive(Debug, Default)]
pub struct InMemoryReadingStore {
    meters: RwLock<HashMap<String, Series>>,
}

impl InMemoryReadingStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn series(&self, meter_id: &str) -> Option<Series> {
        // Series are append-only, so a poisoned lock still guards consistent data.
        self.meters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(meter_id)
            .cloned()
    }

    fn series_or_create(&self, meter_id: &str) -> Series {
        if let Some(series) = self.series(meter_id) {
            return series;
        }

        let mut meters = self.meters.write().unwrap_or_else(PoisonError::into_inner);
        meters.entry(meter_id.to_string()).or_default().clone()
    }
}

impl ReadingStore for InMemoryReadingStore {
    fn append(&self, meter_id: &str, readings: Vec<ElectricityReading>) {
        let appended = readings.len();
        let series = self.series_or_create(meter_id);
        let mut guard = series.lock().unwrap_or_else(PoisonError::into_inner);
        guard.extend(readings);

        tracing::debug!(meter_id, appended, total = guard.len(), "readings appended");
    }

    fn fetch(&self, meter_id: &str) -> Vec<ElectricityReading> {
        match self.series(meter_id) {
            Some(series) => series.lock().unwrap_or_else(PoisonError::into_inner).clone(),
            None => Vec::new(),
        }
    }

    fn meter_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .meters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        ids.sort();
        ids
    }
}
