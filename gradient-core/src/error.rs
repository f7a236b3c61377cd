use thiserror::Error;

/// Reasons a plan cannot be built from the given signal parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrategyError {
    #[error("current price is within the entry range (current price: {current_price}, entry range: [{low}, {high}])")]
    PriceWithinRange {
        current_price: f64,
        low: f64,
        high: f64,
    },

    #[error("entry range is inverted: low {low} is above high {high}")]
    InvertedRange { low: f64, high: f64 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("tick size must be positive and finite, got {tick_size}")]
    InvalidTickSize { tick_size: f64 },
}
