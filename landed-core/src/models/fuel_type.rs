use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FuelType {
    #[default]
    Petrol,
    Diesel,
    Electric,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Petrol => "PETROL",
            Self::Diesel => "DIESEL",
            Self::Electric => "ELECTRIC",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PETROL" => Some(Self::Petrol),
            "DIESEL" => Some(Self::Diesel),
            "ELECTRIC" => Some(Self::Electric),
            _ => None,
        }
    }

    /// Electric vehicles carry no tailpipe emissions charge.
    pub fn has_tailpipe_emissions(&self) -> bool {
        !matches!(self, Self::Electric)
    }
}
