use crate::CostBreakdown;
use crate::calculations::common::round_half_up;
use crate::calculations::{DestinationVat, LandedCostComponents, SalePrice};

/// Rounds full-precision results into the published [`CostBreakdown`].
///
/// This is the only place rounding happens.
pub struct BreakdownAggregator;

impl BreakdownAggregator {
    pub fn aggregate(
        components: &LandedCostComponents,
        vat: &DestinationVat,
        sale: &SalePrice,
    ) -> CostBreakdown {
        CostBreakdown {
            initial_price: round_half_up(components.baseline_price),
            reclaimed_vat: round_half_up(components.reclaimed_vat),
            shipping_costs: round_half_up(components.shipping_cost),
            import_duty_rate: components.import_duty_rate,
            import_duties: round_half_up(components.import_duties),
            auction_fee: round_half_up(components.auction_fee),
            registration_fee: round_half_up(components.registration_fee),
            emissions_cost: round_half_up(components.emissions_cost),
            total_landed_cost: round_half_up(components.total_landed_cost()),
            vat_on_landed_cost: round_half_up(vat.vat_on_landed_cost),
            profit: round_half_up(vat.profit),
            additional_vat_on_profit: round_half_up(vat.additional_vat_on_profit),
            total_costs: round_half_up(vat.total_costs),
            final_sale_price: round_half_up(sale.final_sale_price),
            final_profit: round_half_up(sale.final_profit),
        }
    }
}
