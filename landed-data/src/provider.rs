use std::path::{Path, PathBuf};

use async_trait::async_trait;
use landed_core::{RateProvider, RateProviderError, RateTable};
use tracing::debug;

use crate::loader::RateTableLoader;

/// Reads an exchange-rate snapshot from a CSV file on every fetch.
///
/// Pair with [`landed_core::FallbackRateProvider`] so a missing or broken
/// file degrades to the static table instead of failing the calculation.
#[derive(Debug, Clone)]
pub struct CsvRateProvider {
    path: PathBuf,
}

impl CsvRateProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RateProvider for CsvRateProvider {
    fn name(&self) -> &str {
        "csv"
    }

    async fn fetch(&self) -> Result<RateTable, RateProviderError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let table = RateTableLoader::load(bytes.as_slice())
            .map_err(|e| RateProviderError::Malformed(e.to_string()))?;

        debug!(
            path = %self.path.display(),
            currencies = table.len(),
            "Loaded exchange rates"
        );
        Ok(table)
    }
}
