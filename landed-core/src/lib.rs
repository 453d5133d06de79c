pub mod calculations;
pub mod error;
pub mod models;
pub mod rates;

pub use calculations::{LandedCostEngine, compute};
pub use error::EngineError;
pub use models::*;
pub use rates::{
    FallbackRateProvider, RateProvider, RateProviderError, RateSnapshot, RateSource,
    StaticRateProvider,
};
