use serde::{Deserialize, Serialize};

/// Currencies a vehicle can be priced in at origin.
///
/// All calculations are normalised to [`Currency::BASELINE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Gbp,
    Jpy,
}

impl Currency {
    /// The destination baseline currency.
    pub const BASELINE: Currency = Currency::Eur;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
        }
    }

    /// Parses an ISO 4217 code, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EUR" => Some(Self::Eur),
            "GBP" => Some(Self::Gbp),
            "JPY" => Some(Self::Jpy),
            _ => None,
        }
    }

    pub fn is_baseline(&self) -> bool {
        *self == Self::BASELINE
    }
}

impl std::fmt::Display for Currency {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
