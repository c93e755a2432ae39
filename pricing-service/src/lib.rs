pub mod api;
pub mod bootstrap;
pub mod config;
pub mod seed;
pub mod observability;
pub mod metrics_server;

pub use api::router;
