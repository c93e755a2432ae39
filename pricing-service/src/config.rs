use std::{collections::BTreeMap, fs, path::PathBuf};

use anyhow::{anyhow, Result};
use pricing_core::db::AccountRecord;
use pricing_core::domain::{PricePlan, Supplier};
use rust_decimal::Decimal;
use serde::Deserialize;
use time::Weekday;

const DEFAULT_READINGS_PER_METER: usize = 20;
pub const MAX_READINGS_PER_METER: usize = 100_000;

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PeakMultiplierConfig {
    pub day: String,
    pub multiplier: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanConfig {
    pub name: String,
    pub supplier: Supplier,
    pub unit_rate: Decimal,
    #[serde(default)]
    pub peak_multipliers: Vec<PeakMultiplierConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_readings_per_meter")]
    pub readings_per_meter: usize,
    pub readings_csv: Option<PathBuf>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            readings_per_meter: DEFAULT_READINGS_PER_METER,
            readings_csv: None,
        }
    }
}

fn default_readings_per_meter() -> usize {
    DEFAULT_READINGS_PER_METER
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub metrics: Option<MetricsConfig>,
    pub plans: Vec<PlanConfig>,
    /// Smart meter id -> contracted plan name.
    #[serde(default)]
    pub accounts: BTreeMap<String, String>,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        use std::env;

        let path = env::var("PRICING_CONFIG").unwrap_or_else(|_| "pricing-config.toml".to_string());
        let contents = fs::read_to_string(&path)
            .map_err(|e| anyhow!("failed to read config file '{path}': {e}"))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: AppConfig = toml::from_str(contents)?;
        if cfg.seed.readings_per_meter > MAX_READINGS_PER_METER {
            return Err(anyhow!(
                "seed.readings_per_meter must be at most {MAX_READINGS_PER_METER}, got {}",
                cfg.seed.readings_per_meter
            ));
        }
        Ok(cfg)
    }

    pub fn price_plans(&self) -> Result<Vec<PricePlan>> {
        self.plans
            .iter()
            .map(|p| {
                p.peak_multipliers.iter().try_fold(
                    PricePlan::new(p.name.clone(), p.supplier, p.unit_rate),
                    |plan, m| -> Result<PricePlan> {
                        Ok(plan.with_multiplier(parse_weekday(&m.day)?, m.multiplier))
                    },
                )
            })
            .collect()
    }

    pub fn account_records(&self) -> Vec<AccountRecord> {
        self.accounts
            .iter()
            .map(|(meter_id, plan_name)| AccountRecord::new(meter_id.clone(), plan_name.clone()))
            .collect()
    }
}

/// Accepts full or three-letter English day names, case-insensitively.
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    let day = match s.trim().to_ascii_lowercase().as_str() {
        "monday" | "mon" => Weekday::Monday,
        "tuesday" | "tue" => Weekday::Tuesday,
        "wednesday" | "wed" => Weekday::Wednesday,
        "thursday" | "thu" => Weekday::Thursday,
        "friday" | "fri" => Weekday::Friday,
        "saturday" | "sat" => Weekday::Saturday,
        "sunday" | "sun" => Weekday::Sunday,
        _ => return Err(anyhow!("invalid day of week '{s}'")),
    };
    Ok(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [http]
        bind_addr = "127.0.0.1:8080"

        [[plans]]
        name = "price-plan-0"
        supplier = "dr-evils-dark-energy"
        unit_rate = 10

        [[plans]]
        name = "price-plan-1"
        supplier = "the-green-eco"
        unit_rate = 2.5

        [[plans.peak_multipliers]]
        day = "Saturday"
        multiplier = 1.5

        [accounts]
        "smart-meter-0" = "price-plan-0"
        "smart-meter-1" = "price-plan-1"
    "#;

    #[test]
    fn parses_plans_accounts_and_defaults() {
        let cfg = AppConfig::from_toml_str(SAMPLE).unwrap();

        assert_eq!(cfg.http.bind_addr, "127.0.0.1:8080");
        assert!(cfg.metrics.is_none());
        assert_eq!(cfg.seed.readings_per_meter, 20);
        assert!(cfg.seed.readings_csv.is_none());
        assert_eq!(cfg.account_records().len(), 2);

        let plans = cfg.price_plans().unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].supplier, Supplier::DrEvilsDarkEnergy);
        assert_eq!(plans[1].unit_rate, Decimal::new(25, 1));
        assert_eq!(plans[1].multiplier_for(Weekday::Saturday), Some(Decimal::new(15, 1)));
    }

    #[test]
    fn unknown_supplier_is_rejected() {
        let bad = SAMPLE.replace("the-green-eco", "acme");
        assert!(AppConfig::from_toml_str(&bad).is_err());
    }

    #[test]
    fn invalid_weekday_is_rejected() {
        let bad = SAMPLE.replace("Saturday", "Caturday");
        let cfg = AppConfig::from_toml_str(&bad).unwrap();
        assert!(cfg.price_plans().is_err());
    }

    #[test]
    fn oversized_seed_count_is_rejected() {
        let bad = format!("{SAMPLE}\n[seed]\nreadings_per_meter = 3000000000\n");
        assert!(AppConfig::from_toml_str(&bad).is_err());

        let ok = format!("{SAMPLE}\n[seed]\nreadings_per_meter = {MAX_READINGS_PER_METER}\n");
        assert_eq!(AppConfig::from_toml_str(&ok).unwrap().seed.readings_per_meter, MAX_READINGS_PER_METER);
    }

    #[test]
    fn weekday_names_are_case_insensitive() {
        assert_eq!(parse_weekday("MON").unwrap(), Weekday::Monday);
        assert_eq!(parse_weekday(" sunday ").unwrap(), Weekday::Sunday);
    }
}
