use thiserror::Error;

use crate::models::Currency;

/// Errors surfaced by a single engine computation.
///
/// The engine holds no state, so an error never affects later calls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A numeric input was missing, non-numeric, or negative.
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// The rate table has no positive rate for a required currency.
    #[error("no usable exchange rate for {currency}")]
    RateUnavailable { currency: Currency },
}

impl EngineError {
    pub(crate) fn invalid(
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
