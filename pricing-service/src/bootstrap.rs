//! Builds the pricing core from configuration: plan catalog, accounts, and
//! seeded readings.

use std::sync::Arc;

use anyhow::{bail, Result};
use pricing_core::db::{AccountDirectory, InMemoryReadingStore, PlanCatalog, ReadingStore};
use pricing_core::PricingService;
use rand::Rng;
use time::OffsetDateTime;

use crate::config::AppConfig;
use crate::seed;

pub fn build_service(cfg: &AppConfig) -> Result<PricingService> {
    build_service_with(cfg, &mut rand::thread_rng(), OffsetDateTime::now_utc())
}

/// Same as [`build_service`] with the reading generator's randomness and clock supplied.
pub fn build_service_with<R: Rng>(
    cfg: &AppConfig,
    rng: &mut R,
    now: OffsetDateTime,
) -> Result<PricingService> {
    let plans = PlanCatalog::new(cfg.price_plans()?)?;

    for (meter_id, plan_name) in &cfg.accounts {
        if plans.plan(plan_name).is_none() {
            bail!("account '{meter_id}' refers to unknown price plan '{plan_name}'");
        }
    }
    let accounts = AccountDirectory::new(cfg.account_records());

    let store = InMemoryReadingStore::new();
    for meter_id in accounts.meter_ids() {
        let readings = seed::generate_readings(rng, now, cfg.seed.readings_per_meter);
        if !readings.is_empty() {
            store.append(meter_id, readings);
        }
    }

    if let Some(path) = &cfg.seed.readings_csv {
        let seeded = seed::load_csv_readings(path)?;
        tracing::info!(path = %path.display(), meters = seeded.len(), "loaded seed readings");
        for (meter_id, readings) in seeded {
            store.append(&meter_id, readings);
        }
    }

    tracing::info!(
        plans = plans.len(),
        accounts = accounts.len(),
        meters = store.meter_ids().len(),
        "pricing service bootstrapped"
    );

    Ok(PricingService::new(
        Arc::new(store),
        Arc::new(plans),
        Arc::new(accounts),
    ))
}
