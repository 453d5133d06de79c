//! Conversion between source currencies and the baseline currency.

use rust_decimal::Decimal;

use crate::error::EngineError;
use crate::models::{CalculationInput, Currency, RateTable};

/// Converts amounts to and from the baseline currency using one rate
/// snapshot.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use landed_core::calculations::CurrencyNormalizer;
/// use landed_core::{Currency, RateTable};
///
/// let rates = RateTable::fallback();
/// let normalizer = CurrencyNormalizer::new(&rates);
///
/// assert_eq!(normalizer.to_baseline(dec!(1600000), Currency::Jpy), Ok(dec!(10000)));
/// assert_eq!(normalizer.to_baseline(dec!(500), Currency::Eur), Ok(dec!(500)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CurrencyNormalizer<'a> {
    rates: &'a RateTable,
}

impl<'a> CurrencyNormalizer<'a> {
    pub fn new(rates: &'a RateTable) -> Self {
        Self { rates }
    }

    /// Converts `amount` in `currency` into the baseline currency.
    ///
    /// The result may not exceed [`CalculationInput::MAX_AMOUNT`]; a tiny
    /// rate can otherwise inflate a modest price past what later steps can
    /// add up.
    ///
    /// # Errors
    ///
    /// - [`EngineError::RateUnavailable`] if the table has no positive rate
    ///   for `currency`
    /// - [`EngineError::InvalidInput`] on `source_price` if the converted
    ///   amount is too large
    pub fn to_baseline(
        &self,
        amount: Decimal,
        currency: Currency,
    ) -> Result<Decimal, EngineError> {
        let converted = if currency.is_baseline() {
            amount
        } else {
            let rate = self.rates.rate(currency)?;
            amount
                .checked_div(rate)
                .ok_or_else(|| too_large(Currency::BASELINE))?
        };
        if converted > CalculationInput::MAX_AMOUNT {
            return Err(too_large(Currency::BASELINE));
        }
        Ok(converted)
    }

    /// Converts a baseline amount into `currency`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::RateUnavailable`] if the table has no positive rate
    ///   for `currency`
    /// - [`EngineError::InvalidInput`] on `source_price` if the product
    ///   overflows
    pub fn from_baseline(
        &self,
        amount: Decimal,
        currency: Currency,
    ) -> Result<Decimal, EngineError> {
        if currency.is_baseline() {
            return Ok(amount);
        }
        let rate = self.rates.rate(currency)?;
        amount.checked_mul(rate).ok_or_else(|| too_large(currency))
    }
}

fn too_large(currency: Currency) -> EngineError {
    EngineError::invalid(
        "source_price",
        format!("too large to convert to {currency}"),
    )
}
