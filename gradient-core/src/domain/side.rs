//! Signal direction and where the current price sits relative to the entry range.

use super::range::PriceRange;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of the trading signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(format!("unknown side '{other}' (expected buy or sell)")),
        }
    }
}

/// Position of the current price relative to the entry range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Price is under the range: the lowest entry fills first.
    Below,
    /// Price is over the range: the highest entry fills first.
    Above,
}

impl Placement {
    /// Classify a price against the range endpoints as given.
    ///
    /// Returns `None` when the price touches or lies inside `[low, high]`, or is NaN.
    pub fn classify(current_price: f64, range: &PriceRange) -> Option<Self> {
        if current_price.is_nan() || range.contains(current_price) {
            None
        } else if current_price < range.low {
            Some(Placement::Below)
        } else {
            Some(Placement::Above)
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Below => write!(f, "below"),
            Placement::Above => write!(f, "above"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_parses_case_insensitively() {
        assert_eq!("buy".parse::<Side>().unwrap(), Side::Buy);
        assert_eq!("SELL".parse::<Side>().unwrap(), Side::Sell);
        assert!("hold".parse::<Side>().is_err());
    }

    #[test]
    fn test_side_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"buy\"");
        let side: Side = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(side, Side::Sell);
    }

    #[test]
    fn test_classify_below_and_above() {
        let range = PriceRange::new(1.0, 1.5);
        assert_eq!(Placement::classify(0.8, &range), Some(Placement::Below));
        assert_eq!(Placement::classify(1.6, &range), Some(Placement::Above));
    }

    #[test]
    fn test_classify_inside_and_on_edges_is_none() {
        let range = PriceRange::new(1.0, 1.5);
        assert_eq!(Placement::classify(1.0, &range), None);
        assert_eq!(Placement::classify(1.3, &range), None);
        assert_eq!(Placement::classify(1.5, &range), None);
    }

    #[test]
    fn test_classify_nan_is_none() {
        assert_eq!(Placement::classify(f64::NAN, &PriceRange::new(1.0, 1.5)), None);
    }
}
