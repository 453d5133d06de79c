//! Destination VAT and the required sale price.
//!
//! Destination VAT is owed twice: once on the landed cost and once on the
//! profit margin. The sale price target passes both through to the buyer:
//!
//! ```text
//! sale price = (landed cost + profit) × (1 + VAT rate)
//! ```
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use landed_core::calculations::{DestinationVatEngine, PricingSolver};
//!
//! let vat = DestinationVatEngine::new(dec!(0.19)).calculate(dec!(12000), dec!(10000), dec!(8));
//! let sale = PricingSolver::new(dec!(0.19)).solve(dec!(12000), &vat, dec!(10000), dec!(8));
//!
//! assert_eq!(vat.total_costs, dec!(14432));
//! assert_eq!(sale.final_sale_price, dec!(15232));
//! assert_eq!(sale.final_profit, dec!(800));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// VAT owed in the destination market and the resulting total cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationVat {
    pub vat_on_landed_cost: Decimal,
    /// Target margin in the baseline currency.
    pub profit: Decimal,
    pub additional_vat_on_profit: Decimal,
    /// Landed cost plus both VAT amounts.
    pub total_costs: Decimal,
}

/// Sale price target and what it actually yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalePrice {
    pub final_sale_price: Decimal,
    /// May be negative.
    pub final_profit: Decimal,
}

#[derive(Debug, Clone, Copy)]
pub struct DestinationVatEngine {
    vat_rate: Decimal,
}

impl DestinationVatEngine {
    pub fn new(vat_rate: Decimal) -> Self {
        Self { vat_rate }
    }

    pub fn calculate(
        &self,
        total_landed_cost: Decimal,
        baseline_price: Decimal,
        profit_percentage: Decimal,
    ) -> DestinationVat {
        let vat_on_landed_cost = total_landed_cost * self.vat_rate;
        let profit = target_profit(baseline_price, profit_percentage);
        let additional_vat_on_profit = profit * self.vat_rate;

        DestinationVat {
            vat_on_landed_cost,
            profit,
            additional_vat_on_profit,
            total_costs: total_landed_cost + vat_on_landed_cost + additional_vat_on_profit,
        }
    }
}

/// Margin on the baseline price for a percentage target.
fn target_profit(
    baseline_price: Decimal,
    profit_percentage: Decimal,
) -> Decimal {
    baseline_price * profit_percentage / Decimal::ONE_HUNDRED
}

#[derive(Debug, Clone, Copy)]
pub struct PricingSolver {
    vat_rate: Decimal,
}

impl PricingSolver {
    pub fn new(vat_rate: Decimal) -> Self {
        Self { vat_rate }
    }

    /// Sale price needed to net `vat.profit` over landed cost once all
    /// destination VAT is paid, and the profit that price yields against
    /// `vat.total_costs`.
    ///
    /// No target is computed for a free vehicle or a zero margin: the sale
    /// price is zero and the final profit is the negated total cost.
    pub fn solve(
        &self,
        total_landed_cost: Decimal,
        vat: &DestinationVat,
        baseline_price: Decimal,
        profit_percentage: Decimal,
    ) -> SalePrice {
        let final_sale_price = if baseline_price <= Decimal::ZERO
            || profit_percentage <= Decimal::ZERO
        {
            debug!("No sale price target requested");
            Decimal::ZERO
        } else {
            self.required_sale_price(total_landed_cost, vat.profit)
        };

        SalePrice {
            final_sale_price,
            final_profit: final_sale_price - vat.total_costs,
        }
    }

    /// Cost-plus price with destination VAT passed through to the buyer.
    pub fn required_sale_price(
        &self,
        total_landed_cost: Decimal,
        profit: Decimal,
    ) -> Decimal {
        (total_landed_cost + profit) * (Decimal::ONE + self.vat_rate)
    }
}
