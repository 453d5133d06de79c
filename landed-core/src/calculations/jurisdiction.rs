//! Origin-dependent charges: import duty and reclaimable origin VAT.
//!
//! Whether a charge can apply at all comes from the origin's
//! [`JurisdictionPolicy`](crate::JurisdictionPolicy); the buyer's toggles
//! then decide whether it does.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::CalculationInput;

/// Duty rate that was applied and the resulting amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDuty {
    pub rate: Decimal,
    pub amount: Decimal,
}

impl ImportDuty {
    pub const NONE: ImportDuty = ImportDuty {
        rate: Decimal::ZERO,
        amount: Decimal::ZERO,
    };
}

#[derive(Debug, Clone, Copy)]
pub struct ImportDutyCalculator {
    rate: Decimal,
}

impl ImportDutyCalculator {
    pub fn new(rate: Decimal) -> Self {
        Self { rate }
    }

    /// Flat duty on the baseline price for dutiable, non-domestic vehicles.
    pub fn calculate(
        &self,
        input: &CalculationInput,
        baseline_price: Decimal,
    ) -> ImportDuty {
        if !input.import_location.policy().duty_applicable {
            return ImportDuty::NONE;
        }
        if input.origin_is_domestic_manufacture {
            debug!("Domestically manufactured vehicle; import duty waived");
            return ImportDuty::NONE;
        }
        ImportDuty {
            rate: self.rate,
            amount: baseline_price * self.rate,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReclaimVatCalculator {
    rate: Decimal,
}

impl ReclaimVatCalculator {
    pub fn new(rate: Decimal) -> Self {
        Self { rate }
    }

    /// Origin VAT the buyer gets back. This is subtracted from landed cost.
    pub fn calculate(
        &self,
        input: &CalculationInput,
        baseline_price: Decimal,
    ) -> Decimal {
        if !input.is_vat_qualified {
            return Decimal::ZERO;
        }
        if !input.import_location.policy().reclaim_applicable {
            debug!(
                location = input.import_location.as_str(),
                "VAT qualification has no effect for this origin; ignoring"
            );
            return Decimal::ZERO;
        }
        baseline_price * self.rate
    }
}
