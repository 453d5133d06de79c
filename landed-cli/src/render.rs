//! Plain-text report of a [`CostBreakdown`].

use std::fmt;

use landed_core::{CostBreakdown, Currency, RateSnapshot, RateSource};
use rust_decimal::Decimal;

use crate::app::Estimate;

/// Profit percentages offered as quick choices.
pub const PROFIT_PRESETS: [u32; 3] = [5, 8, 10];

const LABEL_WIDTH: usize = 26;
const VALUE_WIDTH: usize = 12;

/// Renders an [`Estimate`] as an aligned table grouped into landed cost,
/// VAT, and pricing sections.
pub struct BreakdownReport<'a> {
    estimate: &'a Estimate,
}

impl<'a> BreakdownReport<'a> {
    pub fn new(estimate: &'a Estimate) -> Self {
        Self { estimate }
    }

    fn landed_cost_section(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let b = &self.estimate.breakdown;

        heading(f, "Landed cost")?;
        row(f, "Purchase price", b.initial_price)?;
        if !b.reclaimed_vat.is_zero() {
            row(f, "Reclaimed VAT", -b.reclaimed_vat)?;
        }
        row(f, "Shipping", b.shipping_costs)?;
        row(
            f,
            &format!("Import duty ({}%)", percent(b.import_duty_rate)),
            b.import_duties,
        )?;
        if !b.auction_fee.is_zero() {
            row(f, "Auction fee", b.auction_fee)?;
        }
        if !b.registration_fee.is_zero() {
            row(f, "Registration", b.registration_fee)?;
        }
        row(f, "Emissions tax", b.emissions_cost)?;
        rule(f)?;
        row(f, "Total landed cost", b.total_landed_cost)
    }

    fn vat_section(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let b = &self.estimate.breakdown;

        heading(f, "VAT")?;
        row(f, "VAT on landed cost", b.vat_on_landed_cost)?;
        row(f, "VAT on profit", b.additional_vat_on_profit)?;
        rule(f)?;
        row(f, "Total costs", b.total_costs)
    }

    fn pricing_section(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let b = &self.estimate.breakdown;
        let percentage = self.estimate.input.profit_percentage;

        heading(f, "Pricing")?;
        row(
            f,
            &format!("Target profit ({}%)", percent_points(percentage)),
            b.profit,
        )?;
        row(f, "Final sale price", b.final_sale_price)?;
        row(f, "Final profit", b.final_profit)?;
        writeln!(f)?;
        writeln!(f, "{}", presets_hint(b))
    }
}

impl fmt::Display for BreakdownReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        self.landed_cost_section(f)?;
        writeln!(f)?;
        self.vat_section(f)?;
        writeln!(f)?;
        self.pricing_section(f)?;
        writeln!(f, "{}", rates_line(&self.estimate.rates))
    }
}

/// Suggests the preset margins, worded for whether a target was set.
pub fn presets_hint(breakdown: &CostBreakdown) -> String {
    let presets = PROFIT_PRESETS
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    if breakdown.has_sale_target() {
        format!("Other margins: --profit {presets}")
    } else {
        format!("No sale target set. Try --profit {presets}")
    }
}

/// Describes which exchange rates were used.
pub fn rates_line(snapshot: &RateSnapshot) -> String {
    let rates = snapshot
        .table
        .iter()
        .map(|(currency, rate)| format!("1 {} = {} {}", Currency::BASELINE, rate, currency))
        .collect::<Vec<_>>()
        .join(", ");

    match snapshot.source {
        RateSource::Live => format!("Rates: {rates}"),
        RateSource::Fallback => format!("Rates (fallback): {rates}"),
    }
}

fn heading(
    f: &mut fmt::Formatter<'_>,
    title: &str,
) -> fmt::Result {
    writeln!(f, "{title}")
}

fn row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: Decimal,
) -> fmt::Result {
    writeln!(
        f,
        "  {:<LABEL_WIDTH$}{:>VALUE_WIDTH$} {}",
        label,
        value.to_string(),
        Currency::BASELINE
    )
}

fn rule(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "  {}", "-".repeat(LABEL_WIDTH + VALUE_WIDTH + 4))
}

/// A fraction such as `0.10` as whole-number percent text (`10`).
fn percent(rate: Decimal) -> Decimal {
    percent_points(rate * Decimal::ONE_HUNDRED)
}

fn percent_points(value: Decimal) -> Decimal {
    value.normalize()
}

#[cfg(test)]
mod tests {
    use landed_core::{FuelType, ImportLocation, RateTable, compute};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn eu_estimate(profit: Decimal) -> Estimate {
        let input = landed_core::CalculationInput {
            source_price: dec!(10000),
            source_currency: Currency::Eur,
            shipping_cost: dec!(2000),
            profit_percentage: profit,
            emissions: 0,
            fuel_type: FuelType::Petrol,
            import_location: ImportLocation::Eu,
            origin_is_domestic_manufacture: false,
            is_vat_qualified: false,
            include_auction_fees: false,
        };
        let table = RateTable::fallback();
        let breakdown = compute(&input, &table).expect("Failed to compute");

        Estimate {
            input,
            breakdown,
            rates: RateSnapshot {
                table,
                source: RateSource::Fallback,
            },
        }
    }

    // ── report layout ────────────────────────────────────────────────────

    #[test]
    fn report_groups_sections_in_order() {
        let report = BreakdownReport::new(&eu_estimate(dec!(8))).to_string();

        let landed = report.find("Landed cost").expect("missing landed section");
        let vat = report.find("\nVAT\n").expect("missing VAT section");
        let pricing = report.find("Pricing").expect("missing pricing section");
        assert!(landed < vat && vat < pricing);
    }

    #[test]
    fn report_lines_carry_rounded_amounts() {
        let report = BreakdownReport::new(&eu_estimate(dec!(8))).to_string();

        let line = |label: &str| {
            report
                .lines()
                .find(|l| l.trim_start().starts_with(label))
                .map(|l| l.split_whitespace().rev().nth(1).unwrap_or("").to_string())
        };
        assert_eq!(line("Total landed cost").as_deref(), Some("12000"));
        assert_eq!(line("VAT on landed cost").as_deref(), Some("2280"));
        assert_eq!(line("VAT on profit").as_deref(), Some("152"));
        assert_eq!(line("Total costs").as_deref(), Some("14432"));
        assert_eq!(line("Final sale price").as_deref(), Some("15232"));
        assert_eq!(line("Final profit").as_deref(), Some("800"));
    }

    #[test]
    fn report_omits_zero_optional_charges() {
        let report = BreakdownReport::new(&eu_estimate(dec!(8))).to_string();

        assert!(!report.contains("Auction fee"));
        assert!(!report.contains("Reclaimed VAT"));
        assert!(!report.contains("Registration"));
        assert!(report.contains("Import duty (0%)"));
        assert!(report.contains("Target profit (8%)"));
    }

    // ── hints ────────────────────────────────────────────────────────────

    #[test]
    fn hint_suggests_presets_without_target() {
        let estimate = eu_estimate(dec!(0));

        assert_eq!(
            presets_hint(&estimate.breakdown),
            "No sale target set. Try --profit 5, 8, 10"
        );
    }

    #[test]
    fn hint_lists_other_margins_with_target() {
        let estimate = eu_estimate(dec!(10));

        assert_eq!(
            presets_hint(&estimate.breakdown),
            "Other margins: --profit 5, 8, 10"
        );
    }

    #[test]
    fn rates_line_marks_fallback() {
        let snapshot = RateSnapshot {
            table: RateTable::fallback(),
            source: RateSource::Fallback,
        };

        assert_eq!(
            rates_line(&snapshot),
            "Rates (fallback): 1 EUR = 0.85 GBP, 1 EUR = 160 JPY"
        );
    }

    #[test]
    fn duty_rate_is_shown_as_whole_percent() {
        assert_eq!(percent(dec!(0.10)).to_string(), "10");
        assert_eq!(percent(dec!(0)).to_string(), "0");
    }
}
