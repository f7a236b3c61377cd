use serde::{Deserialize, Serialize};
use std::fmt;

/// Price interval in which entries are placed.
///
/// Holds the endpoints exactly as the caller supplied them. Use
/// [`PriceRange::normalized`] when the order of the endpoints must not matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

impl PriceRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Same range with `low <= high`.
    pub fn normalized(&self) -> Self {
        Self {
            low: self.low.min(self.high),
            high: self.low.max(self.high),
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.low <= self.high
    }

    /// Inclusive containment on the endpoints as given.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.low && price <= self.high
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
