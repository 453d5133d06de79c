//! Landed-cost and pricing engine.
//!
//! Runs every calculator for one input and one rate snapshot and returns
//! the rounded [`CostBreakdown`].
//!
//! # Pipeline
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Validate input and rate table |
//! | 2    | Convert the source price to the baseline currency |
//! | 3    | Import duty (Japan, non-domestic) |
//! | 4    | Emissions tax (progressive, capped) |
//! | 5    | Auction fee (Japan, on request) |
//! | 6    | Reclaimed origin VAT (UK, qualified buyers) |
//! | 7    | Landed cost (Steps 2–6 + shipping + registration) |
//! | 8    | Destination VAT on landed cost and on profit |
//! | 9    | Required sale price and final profit |
//! | 10   | Round every field |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use landed_core::{
//!     CalculationInput, Currency, FuelType, ImportLocation, LandedCostEngine, RateTable,
//! };
//!
//! let input = CalculationInput {
//!     source_price: dec!(10000),
//!     source_currency: Currency::Eur,
//!     shipping_cost: dec!(2000),
//!     profit_percentage: dec!(8),
//!     emissions: 0,
//!     fuel_type: FuelType::Electric,
//!     import_location: ImportLocation::Eu,
//!     origin_is_domestic_manufacture: false,
//!     is_vat_qualified: false,
//!     include_auction_fees: false,
//! };
//!
//! let engine = LandedCostEngine::default();
//! let breakdown = engine.compute(&input, &RateTable::fallback()).unwrap();
//!
//! assert_eq!(breakdown.total_landed_cost, dec!(12000));
//! assert_eq!(breakdown.total_costs, dec!(14432));
//! assert_eq!(breakdown.final_sale_price, dec!(15232));
//! assert_eq!(breakdown.final_profit, dec!(800));
//! ```

use tracing::debug;

use crate::calculations::{
    AuctionFeeCalculator, BreakdownAggregator, CurrencyNormalizer, DestinationVatEngine,
    EmissionsTaxCalculator, ImportDutyCalculator, LandedCostComponents, PricingSolver,
    ReclaimVatCalculator,
};
use crate::error::EngineError;
use crate::{CalculationInput, ConfigError, CostBreakdown, EngineConfig, RateTable};

/// Stateless calculator over a validated [`EngineConfig`].
///
/// Safe to share between threads; every call to
/// [`compute`](LandedCostEngine::compute) is independent.
#[derive(Debug, Clone, Default)]
pub struct LandedCostEngine {
    config: EngineConfig,
}

impl LandedCostEngine {
    /// Creates an engine, validating the configuration once up front.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes the full cost and pricing breakdown.
    ///
    /// Call again with a new [`RateTable`] whenever rates refresh; nothing is
    /// cached between calls.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if:
    /// - a price, shipping cost, or profit percentage is negative or above
    ///   its limit on [`CalculationInput`]
    /// - the rate table lacks a positive GBP or JPY rate
    /// - a conversion pushes the price past
    ///   [`CalculationInput::MAX_AMOUNT`] or overflows
    pub fn compute(
        &self,
        input: &CalculationInput,
        rates: &RateTable,
    ) -> Result<CostBreakdown, EngineError> {
        input.validate()?;
        rates.ensure_complete()?;
        self.log_ignored_inputs(input);

        let config = &self.config;
        let normalizer = CurrencyNormalizer::new(rates);
        let baseline_price = normalizer.to_baseline(input.source_price, input.source_currency)?;

        let duty =
            ImportDutyCalculator::new(config.import_duty_rate).calculate(input, baseline_price);
        let emissions_cost =
            EmissionsTaxCalculator::new(&config.emissions_brackets, config.emissions_cap)
                .calculate(input.effective_emissions());
        let auction_fee = AuctionFeeCalculator::new(&config.auction_fees).calculate(
            input,
            baseline_price,
            &normalizer,
        )?;
        let reclaimed_vat =
            ReclaimVatCalculator::new(config.reclaim_vat_rate).calculate(input, baseline_price);

        let components = LandedCostComponents {
            baseline_price,
            shipping_cost: input.shipping_cost,
            import_duty_rate: duty.rate,
            import_duties: duty.amount,
            registration_fee: config.registration_fee,
            emissions_cost,
            auction_fee,
            reclaimed_vat,
        };
        let total_landed_cost = components.total_landed_cost();

        let vat = DestinationVatEngine::new(config.destination_vat_rate).calculate(
            total_landed_cost,
            baseline_price,
            input.profit_percentage,
        );
        let sale = PricingSolver::new(config.destination_vat_rate).solve(
            total_landed_cost,
            &vat,
            baseline_price,
            input.profit_percentage,
        );

        debug!(
            location = input.import_location.as_str(),
            baseline_price = %baseline_price,
            total_landed_cost = %total_landed_cost,
            final_sale_price = %sale.final_sale_price,
            "Landed cost computed"
        );

        Ok(BreakdownAggregator::aggregate(&components, &vat, &sale))
    }

    /// Inputs that are valid but have no effect for this combination.
    fn log_ignored_inputs(
        &self,
        input: &CalculationInput,
    ) {
        if input.emissions > 0 && input.effective_emissions() == 0 {
            debug!(
                emissions = input.emissions,
                fuel = input.fuel_type.as_str(),
                "Emissions ignored for this fuel type"
            );
        }
        let policy = input.import_location.policy();
        if input.origin_is_domestic_manufacture && !policy.duty_applicable {
            debug!(
                location = input.import_location.as_str(),
                "Domestic manufacture flag has no effect for this origin"
            );
        }
    }
}

/// Computes a breakdown with the default rules.
///
/// # Errors
///
/// See [`LandedCostEngine::compute`].
pub fn compute(
    input: &CalculationInput,
    rates: &RateTable,
) -> Result<CostBreakdown, EngineError> {
    LandedCostEngine::default().compute(input, rates)
}
