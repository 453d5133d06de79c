pub mod fallback;
pub mod provider;

pub use fallback::{FallbackRateProvider, RateSnapshot, RateSource};
pub use provider::{RateProvider, RateProviderError, StaticRateProvider};
