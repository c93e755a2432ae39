pub mod csv_file;
pub mod generator;

pub use csv_file::{load_csv_readings, read_csv_readings};
pub use generator::generate_readings;

#[derive(thiserror::Error, Debug)]
pub enum SeedError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(String),
    #[error("invalid reading: {0}")]
    Reading(#[from] pricing_core::Error),
}
