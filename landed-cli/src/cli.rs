use std::path::PathBuf;

use clap::Parser;
use landed_core::RawCalculationInput;

use crate::logging::LogLevel;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Landed cost and sale price calculator for imported vehicles.
///
/// Converts the purchase price to EUR, adds shipping, duty, auction fees,
/// registration and emissions tax, then solves for the sale price that
/// leaves the requested profit after destination VAT.
#[derive(Debug, Parser)]
#[command(name = "landed-cost")]
#[command(version, about)]
pub struct Cli {
    /// Purchase price in the source currency.
    #[arg(long)]
    pub price: String,

    /// Currency of the purchase price (EUR, GBP, JPY).
    #[arg(long, default_value = "EUR")]
    pub currency: String,

    /// Shipping cost in EUR.
    #[arg(long)]
    pub shipping: String,

    /// Target profit as a percentage of the purchase price (e.g. 5, 8, 10).
    /// Leave out for a cost-only breakdown.
    #[arg(long, default_value = "")]
    pub profit: String,

    /// CO2 emissions in g/km.
    #[arg(long, default_value = "")]
    pub emissions: String,

    /// Fuel type (petrol, diesel, electric).
    #[arg(long, default_value = "petrol")]
    pub fuel: String,

    /// Origin of the import (japan, uk, eu).
    #[arg(long)]
    pub origin: String,

    /// Vehicle was manufactured in the origin country (Japan only).
    #[arg(long, default_value_t = false)]
    pub domestic: bool,

    /// Buyer can reclaim origin VAT (UK only).
    #[arg(long, default_value_t = false)]
    pub vat_qualified: bool,

    /// Add Japanese auction house fees.
    #[arg(long, default_value_t = false)]
    pub auction_fees: bool,

    /// CSV file with `currency,rate` rows. Fallback rates are used when
    /// absent or unreadable.
    #[arg(long)]
    pub rates: Option<PathBuf>,

    /// TOML file overriding the default rates, fees, and tier tables.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log verbosity; overrides RUST_LOG.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

impl Cli {
    /// Collects the calculation arguments as an unparsed form.
    pub fn raw_input(&self) -> RawCalculationInput {
        RawCalculationInput {
            source_price: self.price.clone(),
            source_currency: self.currency.clone(),
            shipping_cost: self.shipping.clone(),
            profit_percentage: self.profit.clone(),
            emissions: self.emissions.clone(),
            fuel_type: self.fuel.clone(),
            import_location: self.origin.clone(),
            origin_is_domestic_manufacture: self.domestic,
            is_vat_qualified: self.vat_qualified,
            include_auction_fees: self.auction_fees,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn minimal_arguments_fill_defaults() {
        let cli = Cli::try_parse_from([
            "landed-cost",
            "--price",
            "10000",
            "--shipping",
            "2000",
            "--origin",
            "eu",
        ])
        .expect("Failed to parse arguments");

        assert_eq!(
            cli.raw_input(),
            RawCalculationInput {
                source_price: "10000".to_string(),
                source_currency: "EUR".to_string(),
                shipping_cost: "2000".to_string(),
                profit_percentage: String::new(),
                emissions: String::new(),
                fuel_type: "petrol".to_string(),
                import_location: "eu".to_string(),
                origin_is_domestic_manufacture: false,
                is_vat_qualified: false,
                include_auction_fees: false,
            }
        );
        assert_eq!(cli.log_level, None);
    }

    #[test]
    fn flags_and_paths_are_carried() {
        let cli = Cli::try_parse_from([
            "landed-cost",
            "--price",
            "1000000",
            "--currency",
            "JPY",
            "--shipping",
            "2000",
            "--origin",
            "japan",
            "--auction-fees",
            "--domestic",
            "--rates",
            "rates.csv",
            "--log-level",
            "debug",
        ])
        .expect("Failed to parse arguments");

        let raw = cli.raw_input();
        assert!(raw.include_auction_fees);
        assert!(raw.origin_is_domestic_manufacture);
        assert!(!raw.is_vat_qualified);
        assert_eq!(cli.rates, Some(PathBuf::from("rates.csv")));
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn price_is_required() {
        let result = Cli::try_parse_from(["landed-cost", "--shipping", "2000", "--origin", "eu"]);

        assert!(result.is_err());
    }
}
