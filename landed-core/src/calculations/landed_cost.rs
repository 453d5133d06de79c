use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Every addend of the landed cost, at full precision and in the baseline
/// currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandedCostComponents {
    pub baseline_price: Decimal,
    pub shipping_cost: Decimal,
    pub import_duty_rate: Decimal,
    pub import_duties: Decimal,
    pub registration_fee: Decimal,
    pub emissions_cost: Decimal,
    pub auction_fee: Decimal,
    pub reclaimed_vat: Decimal,
}

impl LandedCostComponents {
    /// Cost of the vehicle delivered and registered, before destination VAT.
    ///
    /// Reclaimed origin VAT is the only subtraction.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use landed_core::calculations::LandedCostComponents;
    ///
    /// let components = LandedCostComponents {
    ///     baseline_price: dec!(10000),
    ///     shipping_cost: dec!(2000),
    ///     import_duty_rate: dec!(0.10),
    ///     import_duties: dec!(1000),
    ///     registration_fee: dec!(100),
    ///     emissions_cost: dec!(60),
    ///     auction_fee: dec!(531.25),
    ///     reclaimed_vat: dec!(0),
    /// };
    ///
    /// assert_eq!(components.total_landed_cost(), dec!(13691.25));
    /// ```
    pub fn total_landed_cost(&self) -> Decimal {
        self.baseline_price
            + self.shipping_cost
            + self.import_duties
            + self.registration_fee
            + self.emissions_cost
            - self.reclaimed_vat
            + self.auction_fee
    }
}
