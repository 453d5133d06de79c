use async_trait::async_trait;
use thiserror::Error;

use crate::models::RateTable;

#[derive(Debug, Error)]
pub enum RateProviderError {
    #[error("Rate source unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed rate data: {0}")]
    Malformed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of exchange-rate snapshots.
///
/// Implementations may fetch over the network, read files, or return fixed
/// data. The engine never calls a provider itself; the application asks for
/// a table and passes it to [`LandedCostEngine::compute`](crate::LandedCostEngine::compute).
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Short name used in log messages.
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<RateTable, RateProviderError>;
}

/// Provider that always returns the same table.
#[derive(Debug, Clone)]
pub struct StaticRateProvider {
    table: RateTable,
}

impl StaticRateProvider {
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }
}

impl Default for StaticRateProvider {
    fn default() -> Self {
        Self::new(RateTable::fallback())
    }
}

#[async_trait]
impl RateProvider for StaticRateProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<RateTable, RateProviderError> {
        Ok(self.table.clone())
    }
}
