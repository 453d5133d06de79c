use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Itemised result of one computation, in whole baseline-currency units.
///
/// Every monetary field is non-negative except `final_profit`, which is
/// negative when the sale price does not cover total costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Purchase price converted to the baseline currency.
    pub initial_price: Decimal,
    pub reclaimed_vat: Decimal,
    pub shipping_costs: Decimal,

    /// Duty rate that was applied, as a fraction (not rounded).
    pub import_duty_rate: Decimal,
    pub import_duties: Decimal,
    pub auction_fee: Decimal,
    pub registration_fee: Decimal,
    pub emissions_cost: Decimal,
    pub total_landed_cost: Decimal,

    pub vat_on_landed_cost: Decimal,
    pub profit: Decimal,
    pub additional_vat_on_profit: Decimal,
    pub total_costs: Decimal,

    /// Zero when no target margin was requested.
    pub final_sale_price: Decimal,
    pub final_profit: Decimal,
}

impl CostBreakdown {
    /// Whether a sale price target was computed.
    pub fn has_sale_target(&self) -> bool {
        self.final_sale_price > Decimal::ZERO
    }
}
