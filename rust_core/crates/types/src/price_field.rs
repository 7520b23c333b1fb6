use serde::{Deserialize, Serialize};

/// Column of a price bar an indicator or the engine reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceField {
    /// Open price.
    Open,
    /// High price.
    High,
    /// Low price.
    Low,
    /// Raw close.
    Close,
    /// Adjusted close.
    #[default]
    AdjustedClose,
    /// Volume.
    Volume,
}

impl PriceField {
    /// Returns snake_case string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceField::Open => "open",
            PriceField::High => "high",
            PriceField::Low => "low",
            PriceField::Close => "close",
            PriceField::AdjustedClose => "adjusted_close",
            PriceField::Volume => "volume",
        }
    }
}

impl std::fmt::Display for PriceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error parsing a price field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsePriceFieldError;

impl std::fmt::Display for ParsePriceFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid price field")
    }
}

impl std::error::Error for ParsePriceFieldError {}

impl std::str::FromStr for PriceField {
    type Err = ParsePriceFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(PriceField::Open),
            "high" => Ok(PriceField::High),
            "low" => Ok(PriceField::Low),
            "close" => Ok(PriceField::Close),
            "adjusted_close" | "adj_close" => Ok(PriceField::AdjustedClose),
            "volume" => Ok(PriceField::Volume),
            _ => Err(ParsePriceFieldError),
        }
    }
}
