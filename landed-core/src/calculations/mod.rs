//! Calculation modules for vehicle import landed cost and pricing.
//!
//! Each calculator handles one charge; [`LandedCostEngine`] runs them in
//! order and rounds the result.

pub mod auction_fee;
pub mod breakdown;
pub mod common;
pub mod currency;
pub mod emissions;
pub mod engine;
pub mod jurisdiction;
pub mod landed_cost;
pub mod pricing;

pub use auction_fee::AuctionFeeCalculator;
pub use breakdown::BreakdownAggregator;
pub use currency::CurrencyNormalizer;
pub use emissions::EmissionsTaxCalculator;
pub use engine::{LandedCostEngine, compute};
pub use jurisdiction::{ImportDuty, ImportDutyCalculator, ReclaimVatCalculator};
pub use landed_cost::LandedCostComponents;
pub use pricing::{DestinationVat, DestinationVatEngine, PricingSolver, SalePrice};
