use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::Currency;

/// Snapshot of exchange rates, expressed as units of each currency per one
/// unit of the baseline currency (EUR).
///
/// The baseline is implicitly `1` and is never looked up in the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: BTreeMap<Currency, Decimal>,
}

impl RateTable {
    /// Currencies every table handed to the engine must price.
    pub const REQUIRED: [Currency; 2] = [Currency::Gbp, Currency::Jpy];

    pub fn new() -> Self {
        Self::default()
    }

    /// Static table used when live rates cannot be obtained.
    pub fn fallback() -> Self {
        Self::new()
            .with_rate(Currency::Gbp, Decimal::new(85, 2))
            .with_rate(Currency::Jpy, Decimal::from(160))
    }

    pub fn with_rate(
        mut self,
        currency: Currency,
        rate: Decimal,
    ) -> Self {
        self.insert(currency, rate);
        self
    }

    /// Sets the rate for `currency`. Entries for the baseline are ignored.
    pub fn insert(
        &mut self,
        currency: Currency,
        rate: Decimal,
    ) {
        if !currency.is_baseline() {
            self.rates.insert(currency, rate);
        }
    }

    /// Returns the usable rate for `currency`.
    ///
    /// # Errors
    ///
    /// [`EngineError::RateUnavailable`] when the entry is missing, zero, or
    /// negative.
    pub fn rate(
        &self,
        currency: Currency,
    ) -> Result<Decimal, EngineError> {
        if currency.is_baseline() {
            return Ok(Decimal::ONE);
        }
        match self.rates.get(&currency) {
            Some(rate) if *rate > Decimal::ZERO => Ok(*rate),
            _ => Err(EngineError::RateUnavailable { currency }),
        }
    }

    /// Checks that every [`RateTable::REQUIRED`] currency has a usable rate.
    pub fn ensure_complete(&self) -> Result<(), EngineError> {
        for currency in Self::REQUIRED {
            self.rate(currency)?;
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.ensure_complete().is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Currency, Decimal)> + '_ {
        self.rates.iter().map(|(c, r)| (*c, *r))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn baseline_rate_is_always_one() {
        let table = RateTable::new();

        assert_eq!(table.rate(Currency::Eur), Ok(dec!(1)));
    }

    #[test]
    fn fallback_holds_documented_rates() {
        let table = RateTable::fallback();

        assert_eq!(table.rate(Currency::Gbp), Ok(dec!(0.85)));
        assert_eq!(table.rate(Currency::Jpy), Ok(dec!(160)));
        assert!(table.is_complete());
    }

    #[test]
    fn missing_rate_is_unavailable() {
        let table = RateTable::new().with_rate(Currency::Gbp, dec!(0.85));

        assert_eq!(
            table.rate(Currency::Jpy),
            Err(EngineError::RateUnavailable {
                currency: Currency::Jpy
            })
        );
    }

    #[test]
    fn zero_and_negative_rates_are_unavailable() {
        let table = RateTable::new()
            .with_rate(Currency::Gbp, dec!(0))
            .with_rate(Currency::Jpy, dec!(-160));

        assert!(table.rate(Currency::Gbp).is_err());
        assert!(table.rate(Currency::Jpy).is_err());
    }

    #[test]
    fn ensure_complete_reports_first_missing_currency() {
        let table = RateTable::new().with_rate(Currency::Jpy, dec!(160));

        assert_eq!(
            table.ensure_complete(),
            Err(EngineError::RateUnavailable {
                currency: Currency::Gbp
            })
        );
    }

    #[test]
    fn insert_ignores_baseline_entries() {
        let table = RateTable::new().with_rate(Currency::Eur, dec!(2));

        assert!(table.is_empty());
        assert_eq!(table.rate(Currency::Eur), Ok(dec!(1)));
    }
}
