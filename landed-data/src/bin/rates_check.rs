use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use landed_data::RateTableLoader;

/// Validate an exchange-rate CSV file.
///
/// The CSV file should have the following columns:
/// - currency: ISO code (EUR, GBP, JPY)
/// - rate: units of that currency per one EUR (e.g., 0.85)
#[derive(Parser, Debug)]
#[command(name = "landed-rates-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing exchange rates
    #[arg(short, long)]
    file: PathBuf,

    /// Accept a table that is missing GBP or JPY
    #[arg(long, default_value_t = false)]
    allow_partial: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Checking exchange rates in: {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let records = RateTableLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    println!("Parsed {} records from CSV", records.len());

    let table = RateTableLoader::into_table(&records)
        .with_context(|| format!("Invalid rate data in: {}", args.file.display()))?;

    for (currency, rate) in table.iter() {
        println!("  1 EUR = {} {}", rate, currency);
    }

    if let Err(e) = table.ensure_complete() {
        if !args.allow_partial {
            bail!("Rate table is incomplete: {e}");
        }
        println!("Warning: {e}");
    }

    println!("Rate table is usable.");

    Ok(())
}
