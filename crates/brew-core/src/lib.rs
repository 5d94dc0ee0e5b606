pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use catalog::DefaultCatalog;
pub use config::{BrewConfig, CatalogSource};
pub use error::ConfigError;
pub use types::*;
