//! Order lines and the assembled order plan.

use serde::{Deserialize, Serialize};

/// A single resting order: rounded price and notional size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub price: f64,
    pub size: f64,
}

impl OrderLine {
    pub fn new(price: f64, size: f64) -> Self {
        Self { price, size }
    }
}

/// Laddered entries, matching take-profits and one stop-loss.
///
/// `entries` and `take_profits` are always sorted ascending by price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPlan {
    pub entries: Vec<OrderLine>,
    pub take_profits: Vec<OrderLine>,
    pub stop_loss: OrderLine,
}

impl OrderPlan {
    pub fn total_entry_size(&self) -> f64 {
        self.entries.iter().map(|l| l.size).sum()
    }

    pub fn total_take_profit_size(&self) -> f64 {
        self.take_profits.iter().map(|l| l.size).sum()
    }

    /// Both ladders carry `num_orders` lines.
    ///
    /// False when a short take-profit list truncated the take-profit ladder.
    pub fn is_complete(&self, num_orders: usize) -> bool {
        self.entries.len() == num_orders && self.take_profits.len() == num_orders
    }

    /// Size-weighted mean entry price.
    pub fn average_entry_price(&self) -> Option<f64> {
        let total = self.total_entry_size();
        if self.entries.is_empty() || total == 0.0 {
            return None;
        }
        let weighted: f64 = self.entries.iter().map(|l| l.price * l.size).sum();
        Some(weighted / total)
    }
}
