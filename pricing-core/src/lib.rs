pub mod comparison;
pub mod cost;
pub mod db;
pub mod domain;
pub mod error;
pub mod recommendation;
pub mod service;
pub mod validation;

pub use error::{Error, Result};
pub use service::PricingService;
