//! Static configuration for the landed-cost engine.
//!
//! Every rate, fee, and tier table the engine uses lives here so a change in
//! the rules is a data change. [`EngineConfig::default`] carries the
//! current rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::CalculationInput;

/// Errors found while validating an [`EngineConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A percentage rate is outside the inclusive range 0 to 1.
    #[error("{name} must be between 0 and 1, got {value}")]
    RateOutOfRange { name: &'static str, value: Decimal },

    /// The registration fee must be non-negative.
    #[error("registration fee must be non-negative, got {0}")]
    NegativeRegistrationFee(Decimal),

    /// The emissions tax cap must be non-negative.
    #[error("emissions cap must be non-negative, got {0}")]
    NegativeEmissionsCap(Decimal),

    /// A tier table has no entries.
    #[error("{0} table must not be empty")]
    EmptyTable(&'static str),

    /// Upper bounds in a tier table must be strictly ascending.
    #[error("{table} table bounds must be strictly ascending (tier {index})")]
    UnorderedTable { table: &'static str, index: usize },

    /// Only the final tier may be unbounded, and it must be.
    #[error("{table} table must end with exactly one unbounded tier (tier {index})")]
    MisplacedOpenTier { table: &'static str, index: usize },

    /// A per-gram rate or auction fee is negative.
    #[error("{table} table has a negative charge at tier {index}")]
    NegativeCharge { table: &'static str, index: usize },

    /// A configured charge exceeds [`CalculationInput::MAX_AMOUNT`].
    #[error("{name} must be at most {}, got {value}", CalculationInput::MAX_AMOUNT)]
    ExcessiveAmount { name: &'static str, value: Decimal },
}

/// One slice of the progressive emissions tax.
///
/// The slice runs from the previous bracket's bound (exclusive) to
/// `up_to` (inclusive). `None` means the slice is open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionsBracket {
    pub up_to: Option<u32>,
    pub rate_per_gram: Decimal,
}

/// How an auction tier charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuctionFee {
    /// A flat fee in JPY.
    Fixed(Decimal),
    /// A fraction of the JPY hammer price.
    Rate(Decimal),
}

/// One row of the auction fee schedule; `up_to` is inclusive, in JPY.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionFeeTier {
    pub up_to: Option<Decimal>,
    pub fee: AuctionFee,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// VAT charged in the destination market.
    pub destination_vat_rate: Decimal,

    /// Duty on non-domestic vehicles from Japan.
    pub import_duty_rate: Decimal,

    /// Origin VAT a qualified UK buyer gets back.
    pub reclaim_vat_rate: Decimal,

    /// Flat registration charge in the baseline currency.
    pub registration_fee: Decimal,

    /// Upper limit on the emissions tax.
    pub emissions_cap: Decimal,

    /// Ascending progressive brackets; the last one must be open-ended.
    pub emissions_brackets: Vec<EmissionsBracket>,

    /// Ascending auction schedule; first match wins, last must be open-ended.
    pub auction_fees: Vec<AuctionFeeTier>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            destination_vat_rate: Decimal::new(19, 2),
            import_duty_rate: Decimal::new(10, 2),
            reclaim_vat_rate: Decimal::new(20, 2),
            registration_fee: Decimal::ZERO,
            emissions_cap: Decimal::from(1500),
            emissions_brackets: default_emissions_brackets(),
            auction_fees: default_auction_fees(),
        }
    }
}

fn default_emissions_brackets() -> Vec<EmissionsBracket> {
    [
        (Some(120), Decimal::new(5, 1)),
        (Some(150), Decimal::from(3)),
        (Some(180), Decimal::from(5)),
        (None, Decimal::from(10)),
    ]
    .into_iter()
    .map(|(up_to, rate_per_gram)| EmissionsBracket {
        up_to,
        rate_per_gram,
    })
    .collect()
}

fn default_auction_fees() -> Vec<AuctionFeeTier> {
    let fixed = |up_to: i64, fee: i64| AuctionFeeTier {
        up_to: Some(Decimal::from(up_to)),
        fee: AuctionFee::Fixed(Decimal::from(fee)),
    };
    let rate = |up_to: Option<i64>, percent: i64| AuctionFeeTier {
        up_to: up_to.map(Decimal::from),
        fee: AuctionFee::Rate(Decimal::new(percent, 2)),
    };

    vec![
        fixed(800_000, 75_000),
        fixed(1_500_000, 85_000),
        fixed(1_999_999, 95_000),
        fixed(2_999_999, 110_000),
        fixed(3_999_999, 135_000),
        fixed(4_999_999, 160_000),
        rate(Some(6_000_000), 5),
        rate(Some(7_000_000), 6),
        rate(Some(8_000_000), 7),
        rate(Some(9_000_000), 8),
        rate(None, 9),
    ]
}

impl EngineConfig {
    /// Validates rates, fees, and tier tables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - any VAT or duty rate is outside `[0, 1]`
    /// - the registration fee or emissions cap is negative
    /// - a tier table is empty, not strictly ascending, or does not end in
    ///   a single open-ended tier
    /// - a tier charges a negative amount
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use landed_core::{ConfigError, EngineConfig};
    ///
    /// let config = EngineConfig {
    ///     destination_vat_rate: dec!(1.19),
    ///     ..EngineConfig::default()
    /// };
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(ConfigError::RateOutOfRange {
    ///         name: "destination_vat_rate",
    ///         value: dec!(1.19),
    ///     })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("destination_vat_rate", self.destination_vat_rate),
            ("import_duty_rate", self.import_duty_rate),
            ("reclaim_vat_rate", self.reclaim_vat_rate),
        ] {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        if self.registration_fee < Decimal::ZERO {
            return Err(ConfigError::NegativeRegistrationFee(
                self.registration_fee,
            ));
        }
        if self.emissions_cap < Decimal::ZERO {
            return Err(ConfigError::NegativeEmissionsCap(self.emissions_cap));
        }
        let amounts = [
            ("registration_fee", self.registration_fee),
            ("emissions_cap", self.emissions_cap),
        ]
        .into_iter()
        .chain(
            self.emissions_brackets
                .iter()
                .map(|b| ("emissions rate_per_gram", b.rate_per_gram)),
        )
        .chain(self.auction_fees.iter().filter_map(|t| match t.fee {
            AuctionFee::Fixed(fee) => Some(("auction fixed fee", fee)),
            AuctionFee::Rate(_) => None,
        }));
        for (name, value) in amounts {
            if value > CalculationInput::MAX_AMOUNT {
                return Err(ConfigError::ExcessiveAmount { name, value });
            }
        }

        let emissions_bounds: Vec<_> = self
            .emissions_brackets
            .iter()
            .map(|b| b.up_to.map(Decimal::from))
            .collect();
        validate_bounds("emissions", &emissions_bounds)?;
        if let Some(index) = self
            .emissions_brackets
            .iter()
            .position(|b| b.rate_per_gram < Decimal::ZERO)
        {
            return Err(ConfigError::NegativeCharge {
                table: "emissions",
                index,
            });
        }

        let auction_bounds: Vec<_> = self.auction_fees.iter().map(|t| t.up_to).collect();
        validate_bounds("auction fee", &auction_bounds)?;
        for (index, tier) in self.auction_fees.iter().enumerate() {
            let negative = match tier.fee {
                AuctionFee::Fixed(fee) => fee < Decimal::ZERO,
                AuctionFee::Rate(rate) => {
                    if rate > Decimal::ONE {
                        return Err(ConfigError::RateOutOfRange {
                            name: "auction fee rate",
                            value: rate,
                        });
                    }
                    rate < Decimal::ZERO
                }
            };
            if negative {
                return Err(ConfigError::NegativeCharge {
                    table: "auction fee",
                    index,
                });
            }
        }

        Ok(())
    }
}

/// Bounds must be strictly ascending with only the last one open.
fn validate_bounds(
    table: &'static str,
    bounds: &[Option<Decimal>],
) -> Result<(), ConfigError> {
    if bounds.is_empty() {
        return Err(ConfigError::EmptyTable(table));
    }

    let last = bounds.len() - 1;
    let mut previous: Option<Decimal> = None;
    for (index, bound) in bounds.iter().enumerate() {
        match (bound, index == last) {
            (None, true) => {}
            (None, false) | (Some(_), true) => {
                return Err(ConfigError::MisplacedOpenTier { table, index });
            }
            (Some(bound), false) => {
                if previous.is_some_and(|p| *bound <= p) {
                    return Err(ConfigError::UnorderedTable { table, index });
                }
                previous = Some(*bound);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_config_has_documented_rates() {
        let config = EngineConfig::default();

        assert_eq!(config.destination_vat_rate, dec!(0.19));
        assert_eq!(config.import_duty_rate, dec!(0.10));
        assert_eq!(config.reclaim_vat_rate, dec!(0.20));
        assert_eq!(config.emissions_cap, dec!(1500));
        assert_eq!(config.emissions_brackets.len(), 4);
        assert_eq!(config.auction_fees.len(), 11);
    }

    #[test]
    fn validate_rejects_negative_import_duty_rate() {
        let config = EngineConfig {
            import_duty_rate: dec!(-0.10),
            ..EngineConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::RateOutOfRange {
                name: "import_duty_rate",
                value: dec!(-0.10),
            })
        );
    }

    #[test]
    fn validate_rejects_negative_registration_fee() {
        let config = EngineConfig {
            registration_fee: dec!(-1),
            ..EngineConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeRegistrationFee(dec!(-1)))
        );
    }

    #[test]
    fn validate_rejects_negative_emissions_cap() {
        let config = EngineConfig {
            emissions_cap: dec!(-1500),
            ..EngineConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeEmissionsCap(dec!(-1500)))
        );
    }

    #[test]
    fn validate_rejects_empty_emissions_table() {
        let config = EngineConfig {
            emissions_brackets: vec![],
            ..EngineConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyTable("emissions"))
        );
    }

    #[test]
    fn validate_rejects_descending_emissions_bounds() {
        let config = EngineConfig {
            emissions_brackets: vec![
                EmissionsBracket {
                    up_to: Some(150),
                    rate_per_gram: dec!(1),
                },
                EmissionsBracket {
                    up_to: Some(120),
                    rate_per_gram: dec!(2),
                },
                EmissionsBracket {
                    up_to: None,
                    rate_per_gram: dec!(3),
                },
            ],
            ..EngineConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::UnorderedTable {
                table: "emissions",
                index: 1,
            })
        );
    }

    #[test]
    fn validate_rejects_bounded_final_auction_tier() {
        let mut config = EngineConfig::default();
        config.auction_fees.pop();

        assert_eq!(
            config.validate(),
            Err(ConfigError::MisplacedOpenTier {
                table: "auction fee",
                index: 9,
            })
        );
    }

    #[test]
    fn validate_rejects_open_tier_before_the_end() {
        let mut config = EngineConfig::default();
        config.emissions_brackets[0].up_to = None;

        assert_eq!(
            config.validate(),
            Err(ConfigError::MisplacedOpenTier {
                table: "emissions",
                index: 0,
            })
        );
    }

    #[test]
    fn validate_rejects_negative_auction_fee() {
        let mut config = EngineConfig::default();
        config.auction_fees[2].fee = AuctionFee::Fixed(dec!(-95000));

        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeCharge {
                table: "auction fee",
                index: 2,
            })
        );
    }

    #[test]
    fn validate_rejects_auction_rate_above_one() {
        let mut config = EngineConfig::default();
        config.auction_fees[10].fee = AuctionFee::Rate(dec!(1.5));

        assert_eq!(
            config.validate(),
            Err(ConfigError::RateOutOfRange {
                name: "auction fee rate",
                value: dec!(1.5),
            })
        );
    }

    #[test]
    fn validate_rejects_charges_above_max_amount() {
        let huge = CalculationInput::MAX_AMOUNT + dec!(1);
        let mut config = EngineConfig {
            registration_fee: huge,
            ..EngineConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::ExcessiveAmount {
                name: "registration_fee",
                value: huge,
            })
        );

        config.registration_fee = dec!(0);
        config.emissions_brackets[3].rate_per_gram = huge;

        assert_eq!(
            config.validate(),
            Err(ConfigError::ExcessiveAmount {
                name: "emissions rate_per_gram",
                value: huge,
            })
        );
    }
}
