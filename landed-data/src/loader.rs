use std::collections::BTreeSet;
use std::io::Read;

use landed_core::{Currency, RateTable};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading exchange-rate data.
#[derive(Debug, Error)]
pub enum RateTableLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Unknown currency '{0}'")]
    UnknownCurrency(String),

    #[error("Rate for {currency} must be positive, got {rate}")]
    NonPositiveRate { currency: Currency, rate: Decimal },

    #[error("Baseline currency {0} must have a rate of 1, got {1}")]
    BaselineRate(Currency, Decimal),

    #[error("Currency {0} appears more than once")]
    DuplicateCurrency(Currency),
}

impl From<csv::Error> for RateTableLoaderError {
    fn from(err: csv::Error) -> Self {
        RateTableLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from an exchange-rate CSV file.
///
/// - `currency`: ISO code (EUR, GBP, JPY), case-insensitive
/// - `rate`: units of that currency per one EUR (e.g., 0.85 for GBP)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RateRecord {
    pub currency: String,
    pub rate: Decimal,
}

/// Loader for exchange-rate snapshots stored as CSV.
///
/// A baseline (EUR) row is accepted when its rate is exactly 1 and is
/// otherwise rejected; it never ends up in the resulting [`RateTable`].
pub struct RateTableLoader;

impl RateTableLoader {
    /// Parse rate records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<RateRecord>, RateTableLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: RateRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Build a [`RateTable`] from parsed records.
    ///
    /// Completeness is not checked here; a table missing GBP or JPY is
    /// returned as-is and left for the caller to reject or replace.
    pub fn into_table(records: &[RateRecord]) -> Result<RateTable, RateTableLoaderError> {
        let mut table = RateTable::new();
        let mut seen = BTreeSet::new();

        for record in records {
            let currency = Currency::parse(&record.currency)
                .ok_or_else(|| RateTableLoaderError::UnknownCurrency(record.currency.clone()))?;

            if !seen.insert(currency) {
                return Err(RateTableLoaderError::DuplicateCurrency(currency));
            }

            if currency.is_baseline() {
                if record.rate != Decimal::ONE {
                    return Err(RateTableLoaderError::BaselineRate(currency, record.rate));
                }
                continue;
            }

            if record.rate <= Decimal::ZERO {
                return Err(RateTableLoaderError::NonPositiveRate {
                    currency,
                    rate: record.rate,
                });
            }

            table.insert(currency, record.rate);
        }

        Ok(table)
    }

    /// Parse and build a table in one step.
    pub fn load<R: Read>(reader: R) -> Result<RateTable, RateTableLoaderError> {
        let records = Self::parse(reader)?;
        Self::into_table(&records)
    }
}
