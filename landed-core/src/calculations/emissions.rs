//! Progressive CO₂ road tax.
//!
//! Each bracket taxes only the grams that fall inside it, so the charge
//! grows with emissions but never jumps. The sum is then capped.
//!
//! | Bracket (g/km) | Rate per gram |
//! |----------------|---------------|
//! | 0 – 120        | 0.5           |
//! | 121 – 150      | 3             |
//! | 151 – 180      | 5             |
//! | above 180      | 10            |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use landed_core::EngineConfig;
//! use landed_core::calculations::EmissionsTaxCalculator;
//!
//! let config = EngineConfig::default();
//! let calculator =
//!     EmissionsTaxCalculator::new(&config.emissions_brackets, config.emissions_cap);
//!
//! // 120 × 0.5 + 30 × 3 + 30 × 5 + 50 × 10
//! assert_eq!(calculator.calculate(230), dec!(800));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::EmissionsBracket;
use crate::calculations::common::max;

#[derive(Debug, Clone)]
pub struct EmissionsTaxCalculator<'a> {
    brackets: &'a [EmissionsBracket],
    cap: Decimal,
}

impl<'a> EmissionsTaxCalculator<'a> {
    /// Brackets must be ascending by `up_to`, ending in an open bracket.
    pub fn new(
        brackets: &'a [EmissionsBracket],
        cap: Decimal,
    ) -> Self {
        Self { brackets, cap }
    }

    /// Tax owed for `emissions` g/km, at full precision.
    ///
    /// Fuel type is not considered here; callers pass the effective
    /// emissions figure.
    pub fn calculate(
        &self,
        emissions: u32,
    ) -> Decimal {
        let uncapped = self.uncapped_tax(Decimal::from(emissions));
        if uncapped > self.cap {
            debug!(
                emissions,
                uncapped = %uncapped,
                cap = %self.cap,
                "Emissions tax capped"
            );
            return self.cap;
        }
        uncapped
    }

    fn uncapped_tax(
        &self,
        emissions: Decimal,
    ) -> Decimal {
        let mut lower = Decimal::ZERO;
        let mut total = Decimal::ZERO;

        for bracket in self.brackets {
            let upper = bracket.up_to.map(Decimal::from);
            let top = upper.map_or(emissions, |u| emissions.min(u));
            total += max(top - lower, Decimal::ZERO) * bracket.rate_per_gram;

            match upper {
                Some(u) if emissions > u => lower = u,
                _ => break,
            }
        }

        total
    }
}
