//! Exchange-rate data sources for the landed cost engine.

mod loader;
mod provider;

pub use loader::{RateRecord, RateTableLoader, RateTableLoaderError};
pub use provider::CsvRateProvider;
