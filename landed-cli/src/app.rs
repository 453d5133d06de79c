use std::path::Path;

use landed_core::{
    CalculationInput, CostBreakdown, EngineError, FallbackRateProvider, LandedCostEngine,
    RateSnapshot, RawCalculationInput,
};
use landed_data::CsvRateProvider;
use tracing::{debug, info};

/// Everything needed to report one calculation.
#[derive(Debug, Clone)]
pub struct Estimate {
    pub input: CalculationInput,
    pub breakdown: CostBreakdown,
    pub rates: RateSnapshot,
}

/// Builds the rate provider: the CSV file when given, otherwise the static
/// fallback table. Either way a usable table comes back.
pub fn rate_provider(path: Option<&Path>) -> FallbackRateProvider {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Reading exchange rates from file");
            FallbackRateProvider::new(Box::new(CsvRateProvider::new(path)))
        }
        None => FallbackRateProvider::fallback_only(),
    }
}

/// Parses the form, takes a fresh rate snapshot, and runs the engine.
///
/// # Errors
///
/// [`EngineError::InvalidInput`] for a malformed form. The provider never
/// fails, so [`EngineError::RateUnavailable`] only surfaces if a custom
/// fallback table is itself incomplete.
pub async fn estimate(
    raw: &RawCalculationInput,
    engine: &LandedCostEngine,
    provider: &FallbackRateProvider,
) -> Result<Estimate, EngineError> {
    let input = raw.parse()?;
    let rates = provider.snapshot().await;

    info!(
        origin = input.import_location.as_str(),
        currency = %input.source_currency,
        rate_source = ?rates.source,
        "Computing landed cost"
    );

    let breakdown = engine.compute(&input, &rates.table)?;

    Ok(Estimate {
        input,
        breakdown,
        rates,
    })
}

#[cfg(test)]
mod tests {
    use landed_core::{RateSource, RateTable};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn eu_form() -> RawCalculationInput {
        RawCalculationInput {
            source_price: "10000".to_string(),
            source_currency: "EUR".to_string(),
            shipping_cost: "2000".to_string(),
            profit_percentage: "8".to_string(),
            import_location: "EU".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn estimate_without_rate_file_uses_fallback() {
        let engine = LandedCostEngine::default();
        let provider = rate_provider(None);

        let estimate = estimate(&eu_form(), &engine, &provider)
            .await
            .expect("Failed to estimate");

        assert_eq!(estimate.rates.source, RateSource::Fallback);
        assert_eq!(estimate.rates.table, RateTable::fallback());
        assert_eq!(estimate.breakdown.total_landed_cost, dec!(12000));
        assert_eq!(estimate.breakdown.final_sale_price, dec!(15232));
    }

    #[tokio::test]
    async fn estimate_rejects_malformed_form() {
        let engine = LandedCostEngine::default();
        let provider = rate_provider(None);
        let form = RawCalculationInput {
            shipping_cost: "two thousand".to_string(),
            ..eu_form()
        };

        let result = estimate(&form, &engine, &provider).await;

        assert!(matches!(
            result,
            Err(EngineError::InvalidInput {
                field: "shipping_cost",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn unreadable_rate_file_still_estimates() {
        let engine = LandedCostEngine::default();
        let provider = rate_provider(Some(Path::new("/nonexistent/rates.csv")));

        let estimate = estimate(&eu_form(), &engine, &provider)
            .await
            .expect("Failed to estimate");

        assert_eq!(estimate.rates.source, RateSource::Fallback);
    }
}
