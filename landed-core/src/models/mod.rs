mod calculation_input;
mod cost_breakdown;
mod currency;
mod engine_config;
mod fuel_type;
mod import_location;
mod rate_table;

pub use calculation_input::{CalculationInput, RawCalculationInput};
pub use cost_breakdown::CostBreakdown;
pub use currency::Currency;
pub use engine_config::{AuctionFee, AuctionFeeTier, ConfigError, EmissionsBracket, EngineConfig};
pub use fuel_type::FuelType;
pub use import_location::{ImportLocation, JurisdictionPolicy};
pub use rate_table::RateTable;
