pub mod account_directory;
pub mod plan_catalog;
pub mod reading_store;

pub use account_directory::{AccountDirectory, AccountRecord};
pub use plan_catalog::PlanCatalog;
pub use reading_store::{InMemoryReadingStore, ReadingStore};
