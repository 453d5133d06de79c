//! Japanese auction house fees.
//!
//! The schedule is priced in JPY: the hammer price picks the first tier
//! whose inclusive upper bound covers it, and that tier charges either a
//! flat fee or a fraction of the price. The fee is converted back to the
//! baseline currency with the same rate snapshot.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::CurrencyNormalizer;
use crate::error::EngineError;
use crate::{AuctionFee, AuctionFeeTier, CalculationInput, Currency};

#[derive(Debug, Clone)]
pub struct AuctionFeeCalculator<'a> {
    schedule: &'a [AuctionFeeTier],
}

impl<'a> AuctionFeeCalculator<'a> {
    /// The schedule must be ascending by `up_to` and end in an open tier.
    pub fn new(schedule: &'a [AuctionFeeTier]) -> Self {
        Self { schedule }
    }

    /// Auction fee in the baseline currency, or zero when the origin has no
    /// auction fees or the buyer did not ask for them.
    ///
    /// A JPY-priced vehicle is looked up by its source price directly so the
    /// tier choice does not depend on a conversion round trip. A converted
    /// price keeps its fractional yen, so one landing between integer bounds
    /// (1,999,999.5 JPY, say) is past the lower tier's inclusive bound and
    /// falls into the next tier.
    ///
    /// # Errors
    ///
    /// - [`EngineError::RateUnavailable`] if the JPY rate is missing
    /// - [`EngineError::InvalidInput`] if the JPY conversion overflows
    pub fn calculate(
        &self,
        input: &CalculationInput,
        baseline_price: Decimal,
        normalizer: &CurrencyNormalizer<'_>,
    ) -> Result<Decimal, EngineError> {
        if !input.include_auction_fees {
            return Ok(Decimal::ZERO);
        }
        if !input.import_location.policy().auction_fee_applicable {
            debug!(
                location = input.import_location.as_str(),
                "Auction fees requested for an origin without auctions; ignoring"
            );
            return Ok(Decimal::ZERO);
        }

        let price_jpy = if input.source_currency == Currency::Jpy {
            input.source_price
        } else {
            normalizer.from_baseline(baseline_price, Currency::Jpy)?
        };

        let fee_jpy = self.fee_in_jpy(price_jpy);
        debug!(price_jpy = %price_jpy, fee_jpy = %fee_jpy, "Auction fee tier resolved");

        normalizer.to_baseline(fee_jpy, Currency::Jpy)
    }

    /// Fee in JPY for a JPY hammer price.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use landed_core::EngineConfig;
    /// use landed_core::calculations::AuctionFeeCalculator;
    ///
    /// let config = EngineConfig::default();
    /// let calculator = AuctionFeeCalculator::new(&config.auction_fees);
    ///
    /// assert_eq!(calculator.fee_in_jpy(dec!(1000000)), dec!(85000));
    /// assert_eq!(calculator.fee_in_jpy(dec!(6500000)), dec!(390000));
    /// ```
    pub fn fee_in_jpy(
        &self,
        price_jpy: Decimal,
    ) -> Decimal {
        let tier = self
            .schedule
            .iter()
            .find(|tier| tier.up_to.is_none_or(|bound| price_jpy <= bound));

        match tier {
            Some(AuctionFeeTier {
                fee: AuctionFee::Fixed(fee),
                ..
            }) => *fee,
            Some(AuctionFeeTier {
                fee: AuctionFee::Rate(rate),
                ..
            }) => price_jpy * *rate,
            None => {
                warn!(
                    price_jpy = %price_jpy,
                    "Price exceeds every auction tier; no fee applied"
                );
                Decimal::ZERO
            }
        }
    }
}
