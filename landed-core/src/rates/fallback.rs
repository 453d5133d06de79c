use async_trait::async_trait;
use tracing::{debug, warn};

use super::provider::{RateProvider, RateProviderError};
use crate::models::RateTable;

/// Where a [`RateSnapshot`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSource {
    Live,
    Fallback,
}

/// A rate table together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateSnapshot {
    pub table: RateTable,
    pub source: RateSource,
}

/// Wraps another provider and substitutes a static table whenever it fails
/// or returns a table missing a required currency.
///
/// The fallback is [`RateTable::fallback`] unless replaced with
/// [`FallbackRateProvider::with_fallback`]. `fetch` on this provider never
/// returns an error.
pub struct FallbackRateProvider {
    inner: Option<Box<dyn RateProvider>>,
    fallback: RateTable,
}

impl FallbackRateProvider {
    pub fn new(inner: Box<dyn RateProvider>) -> Self {
        Self {
            inner: Some(inner),
            fallback: RateTable::fallback(),
        }
    }

    /// A provider with no live source; it always serves the fallback table.
    pub fn fallback_only() -> Self {
        Self {
            inner: None,
            fallback: RateTable::fallback(),
        }
    }

    pub fn with_fallback(
        mut self,
        fallback: RateTable,
    ) -> Self {
        self.fallback = fallback;
        self
    }

    /// Fetches from the wrapped provider, falling back on any failure.
    pub async fn snapshot(&self) -> RateSnapshot {
        let Some(inner) = &self.inner else {
            debug!("No live rate provider configured; using fallback rates");
            return self.fallback_snapshot();
        };

        match inner.fetch().await {
            Ok(table) => match table.ensure_complete() {
                Ok(()) => RateSnapshot {
                    table,
                    source: RateSource::Live,
                },
                Err(error) => {
                    warn!(
                        provider = inner.name(),
                        %error,
                        "Rate table incomplete; using fallback rates"
                    );
                    self.fallback_snapshot()
                }
            },
            Err(error) => {
                warn!(
                    provider = inner.name(),
                    %error,
                    "Rate fetch failed; using fallback rates"
                );
                self.fallback_snapshot()
            }
        }
    }

    fn fallback_snapshot(&self) -> RateSnapshot {
        RateSnapshot {
            table: self.fallback.clone(),
            source: RateSource::Fallback,
        }
    }
}

#[async_trait]
impl RateProvider for FallbackRateProvider {
    fn name(&self) -> &str {
        self.inner.as_deref().map_or("fallback", |p| p.name())
    }

    async fn fetch(&self) -> Result<RateTable, RateProviderError> {
        Ok(self.snapshot().await.table)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::Currency;
    use crate::rates::StaticRateProvider;

    // ── stub providers ───────────────────────────────────────────────────

    /// Always fails, counting how often it was asked.
    struct FailingProvider {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl RateProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch(&self) -> Result<RateTable, RateProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(RateProviderError::Unavailable(
                "intentional failure".to_string(),
            ))
        }
    }

    fn live_table() -> RateTable {
        RateTable::new()
            .with_rate(Currency::Gbp, dec!(0.8412))
            .with_rate(Currency::Jpy, dec!(163.7))
    }

    #[tokio::test]
    async fn live_table_is_passed_through() {
        let provider =
            FallbackRateProvider::new(Box::new(StaticRateProvider::new(live_table())));

        let snapshot = provider.snapshot().await;

        assert_eq!(
            snapshot,
            RateSnapshot {
                table: live_table(),
                source: RateSource::Live,
            }
        );
    }

    #[tokio::test]
    async fn failure_yields_fallback_table() {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = FallbackRateProvider::new(Box::new(FailingProvider {
            calls: calls.clone(),
        }));

        let snapshot = provider.snapshot().await;

        assert_eq!(snapshot.source, RateSource::Fallback);
        assert_eq!(snapshot.table, RateTable::fallback());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn incomplete_table_yields_fallback_table() {
        let partial = RateTable::new().with_rate(Currency::Gbp, dec!(0.84));
        let provider = FallbackRateProvider::new(Box::new(StaticRateProvider::new(partial)));

        let snapshot = provider.snapshot().await;

        assert_eq!(snapshot.source, RateSource::Fallback);
        assert_eq!(snapshot.table, RateTable::fallback());
    }

    #[tokio::test]
    async fn fetch_never_fails() {
        let provider = FallbackRateProvider::new(Box::new(FailingProvider {
            calls: Arc::new(AtomicUsize::new(0)),
        }));

        let table = provider.fetch().await.unwrap();

        assert!(table.is_complete());
    }

    #[tokio::test]
    async fn custom_fallback_replaces_default() {
        let provider = FallbackRateProvider::fallback_only().with_fallback(live_table());

        let snapshot = provider.snapshot().await;

        assert_eq!(snapshot.table, live_table());
        assert_eq!(snapshot.source, RateSource::Fallback);
    }

    #[test]
    fn name_reports_wrapped_provider() {
        let wrapped = FallbackRateProvider::new(Box::new(StaticRateProvider::default()));

        assert_eq!(wrapped.name(), "static");
        assert_eq!(FallbackRateProvider::fallback_only().name(), "fallback");
    }
}
