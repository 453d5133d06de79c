use serde::{Deserialize, Serialize};

/// Origin jurisdiction the vehicle is imported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImportLocation {
    Japan,
    Uk,
    Eu,
}

/// Which conditional charges a jurisdiction can produce.
///
/// A flag being `true` only makes the charge *possible*; the matching
/// input toggle (provenance, VAT qualification, auction fees) still decides
/// whether it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JurisdictionPolicy {
    pub duty_applicable: bool,
    pub reclaim_applicable: bool,
    pub auction_fee_applicable: bool,
}

impl ImportLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Japan => "JAPAN",
            Self::Uk => "UK",
            Self::Eu => "EU",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "JAPAN" | "JP" => Some(Self::Japan),
            "UK" | "GB" => Some(Self::Uk),
            "EU" => Some(Self::Eu),
            _ => None,
        }
    }

    pub fn policy(&self) -> JurisdictionPolicy {
        match self {
            Self::Japan => JurisdictionPolicy {
                duty_applicable: true,
                reclaim_applicable: false,
                auction_fee_applicable: true,
            },
            // Post-reform UK duty is unresolved; UK imports stay duty free.
            Self::Uk => JurisdictionPolicy {
                duty_applicable: false,
                reclaim_applicable: true,
                auction_fee_applicable: false,
            },
            Self::Eu => JurisdictionPolicy {
                duty_applicable: false,
                reclaim_applicable: false,
                auction_fee_applicable: false,
            },
        }
    }
}
