use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Currency, FuelType, ImportLocation};

/// Validated parameters for one landed-cost computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Purchase price in `source_currency`.
    pub source_price: Decimal,

    pub source_currency: Currency,

    /// Shipping cost, always in the baseline currency.
    pub shipping_cost: Decimal,

    /// Target margin as a percentage of the baseline price. Zero disables
    /// the sale price target.
    pub profit_percentage: Decimal,

    /// CO₂ emissions in g/km.
    pub emissions: u32,

    pub fuel_type: FuelType,

    pub import_location: ImportLocation,

    /// Japan only: a domestically manufactured vehicle pays no import duty.
    pub origin_is_domestic_manufacture: bool,

    /// UK only: the buyer can reclaim origin VAT.
    pub is_vat_qualified: bool,

    /// Japan only: add the auction house fee.
    pub include_auction_fees: bool,
}

impl CalculationInput {
    /// Largest accepted price or shipping cost, and the largest baseline
    /// amount a conversion may produce: one quadrillion.
    pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

    /// Largest accepted profit percentage.
    pub const MAX_PROFIT_PERCENTAGE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

    /// Emissions that are actually taxed. Electric vehicles are always zero.
    pub fn effective_emissions(&self) -> u32 {
        if self.fuel_type.has_tailpipe_emissions() {
            self.emissions
        } else {
            0
        }
    }

    /// Rejects negative monetary values and percentages, and anything above
    /// [`MAX_AMOUNT`](Self::MAX_AMOUNT) or
    /// [`MAX_PROFIT_PERCENTAGE`](Self::MAX_PROFIT_PERCENTAGE).
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidInput`] naming the first offending field.
    pub fn validate(&self) -> Result<(), EngineError> {
        let checks = [
            ("source_price", self.source_price, Self::MAX_AMOUNT),
            ("shipping_cost", self.shipping_cost, Self::MAX_AMOUNT),
            (
                "profit_percentage",
                self.profit_percentage,
                Self::MAX_PROFIT_PERCENTAGE,
            ),
        ];
        for (field, value, limit) in checks {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(EngineError::invalid(
                    field,
                    format!("must not be negative, got {value}"),
                ));
            }
            if value > limit {
                return Err(EngineError::invalid(
                    field,
                    format!("too large, must be at most {limit}"),
                ));
            }
        }
        Ok(())
    }
}

/// Form values exactly as entered, before any numeric parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCalculationInput {
    pub source_price: String,
    pub source_currency: String,
    pub shipping_cost: String,
    pub profit_percentage: String,
    pub emissions: String,
    pub fuel_type: String,
    pub import_location: String,
    pub origin_is_domestic_manufacture: bool,
    pub is_vat_qualified: bool,
    pub include_auction_fees: bool,
}

impl RawCalculationInput {
    /// Parses the form into a [`CalculationInput`].
    ///
    /// Price and shipping are required. An empty profit percentage or
    /// emissions field means zero. Anything non-numeric or negative is
    /// rejected rather than coerced.
    ///
    /// # Example
    ///
    /// ```
    /// use landed_core::{EngineError, RawCalculationInput};
    ///
    /// let raw = RawCalculationInput {
    ///     source_price: "abc".to_string(),
    ///     source_currency: "EUR".to_string(),
    ///     shipping_cost: "2000".to_string(),
    ///     import_location: "EU".to_string(),
    ///     ..Default::default()
    /// };
    ///
    /// assert!(matches!(
    ///     raw.parse(),
    ///     Err(EngineError::InvalidInput { field: "source_price", .. })
    /// ));
    /// ```
    pub fn parse(&self) -> Result<CalculationInput, EngineError> {
        let source_price = parse_decimal("source_price", &self.source_price, true)?;
        let shipping_cost = parse_decimal("shipping_cost", &self.shipping_cost, true)?;
        let profit_percentage =
            parse_decimal("profit_percentage", &self.profit_percentage, false)?;
        let emissions = parse_emissions(&self.emissions)?;

        let source_currency = Currency::parse(&self.source_currency).ok_or_else(|| {
            EngineError::invalid(
                "source_currency",
                format!("unknown currency '{}'", self.source_currency),
            )
        })?;
        let fuel_type = if self.fuel_type.trim().is_empty() {
            FuelType::default()
        } else {
            FuelType::parse(&self.fuel_type).ok_or_else(|| {
                EngineError::invalid(
                    "fuel_type",
                    format!("unknown fuel type '{}'", self.fuel_type),
                )
            })?
        };
        let import_location = ImportLocation::parse(&self.import_location).ok_or_else(|| {
            EngineError::invalid(
                "import_location",
                format!("unknown import location '{}'", self.import_location),
            )
        })?;

        let input = CalculationInput {
            source_price,
            source_currency,
            shipping_cost,
            profit_percentage,
            emissions,
            fuel_type,
            import_location,
            origin_is_domestic_manufacture: self.origin_is_domestic_manufacture,
            is_vat_qualified: self.is_vat_qualified,
            include_auction_fees: self.include_auction_fees,
        };
        input.validate()?;
        Ok(input)
    }
}

fn parse_decimal(
    field: &'static str,
    value: &str,
    required: bool,
) -> Result<Decimal, EngineError> {
    let value = value.trim();
    if value.is_empty() {
        return if required {
            Err(EngineError::invalid(field, "is required"))
        } else {
            Ok(Decimal::ZERO)
        };
    }
    let parsed = value
        .parse::<Decimal>()
        .map_err(|_| EngineError::invalid(field, format!("'{value}' is not a number")))?;
    if parsed.is_sign_negative() && !parsed.is_zero() {
        return Err(EngineError::invalid(
            field,
            format!("must not be negative, got {parsed}"),
        ));
    }
    Ok(parsed)
}

fn parse_emissions(value: &str) -> Result<u32, EngineError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    if value.starts_with('-') {
        return Err(EngineError::invalid(
            "emissions",
            format!("must not be negative, got {value}"),
        ));
    }
    value.parse::<u32>().map_err(|_| {
        EngineError::invalid(
            "emissions",
            format!("'{value}' is not a whole number of g/km"),
        )
    })
}
