//! Dynamic gradient entry — builds a laddered order plan for a signal.
//!
//! Entries are spread evenly inside the entry range. Each entry and each
//! take-profit is paired with one size fraction from the config; the largest
//! fraction (`order_sizes[0]`) goes to the entry nearest the current price.
//!
//! Which list gets reversed before pairing depends on the signal:
//!
//! | side | placement | entries   | take-profits |
//! |------|-----------|-----------|--------------|
//! | buy  | below     | ascending | as given     |
//! | buy  | above     | reversed  | as given     |
//! | sell | below     | ascending | reversed     |
//! | sell | above     | reversed  | reversed     |
//!
//! Entry reversal depends only on placement, take-profit reversal only on side.

use crate::config::{ConfigError, StrategyConfig};
use crate::domain::{OrderLine, OrderPlan, Placement, PriceRange, Side};
use crate::error::StrategyError;
use crate::ladder::entry_points;
use crate::rounding::round_to_precision;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Which ladders are reversed before zipping with `order_sizes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairingRule {
    pub reverse_entries: bool,
    pub reverse_take_profits: bool,
}

impl PairingRule {
    pub fn for_signal(side: Side, placement: Placement) -> Self {
        Self {
            reverse_entries: placement == Placement::Above,
            reverse_take_profits: side == Side::Sell,
        }
    }
}

/// Signal parameters for a single plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub side: Side,
    /// Endpoints as `[low, high]`; an inverted range is rejected.
    pub entry_range: PriceRange,
    /// Conventionally ascending, one per order size.
    pub take_profit_prices: Vec<f64>,
    pub stop_loss_price: f64,
    /// Only used to place the price below or above the entry range.
    pub current_price: f64,
    /// Numeraire for sizing (account balance, lot size, ...).
    pub balance: f64,
    /// Decimal places for every output price.
    pub precision: u32,
}

/// Order plan builder.
///
/// Holds an immutable [`StrategyConfig`]; `build_plan` borrows `&self` only,
/// so one builder can serve many threads.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicGradientEntry {
    config: StrategyConfig,
}

impl Default for DynamicGradientEntry {
    fn default() -> Self {
        Self {
            config: StrategyConfig::default(),
        }
    }
}

impl DynamicGradientEntry {
    pub fn new(config: StrategyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    pub fn num_orders(&self) -> usize {
        self.config.num_orders()
    }

    /// Equally spaced entry prices inside `range`, ascending.
    pub fn generate_entry_points(&self, range: PriceRange) -> Vec<f64> {
        entry_points(range, self.num_orders())
    }

    /// Build the full plan, or fail before producing any output.
    ///
    /// # Errors
    /// - [`StrategyError::NonFinite`] for a NaN/infinite range end, current
    ///   price, stop-loss or balance
    /// - [`StrategyError::InvertedRange`] when `entry_range.low > entry_range.high`
    /// - [`StrategyError::PriceWithinRange`] when the current price touches or
    ///   lies inside the entry range
    pub fn build_plan(&self, request: &PlanRequest) -> Result<OrderPlan, StrategyError> {
        let range = request.entry_range;
        validate_inputs(request)?;

        let placement = Placement::classify(request.current_price, &range).ok_or(
            StrategyError::PriceWithinRange {
                current_price: request.current_price,
                low: range.low,
                high: range.high,
            },
        )?;
        let rule = PairingRule::for_signal(request.side, placement);
        debug!(
            "{} signal, price {} {} range {}: reverse_entries={} reverse_take_profits={}",
            request.side,
            request.current_price,
            placement,
            range,
            rule.reverse_entries,
            rule.reverse_take_profits
        );

        if request.take_profit_prices.len() != self.num_orders() {
            warn!(
                "{} take-profit prices for {} orders; pairing stops at the shorter list",
                request.take_profit_prices.len(),
                self.num_orders()
            );
        }

        let entries = self.generate_entry_points(range);
        let entries = self.ladder(
            &entries,
            rule.reverse_entries,
            request.balance,
            request.precision,
        );
        let take_profits = self.ladder(
            &request.take_profit_prices,
            rule.reverse_take_profits,
            request.balance,
            request.precision,
        );

        let stop_loss = OrderLine::new(
            round_to_precision(request.stop_loss_price, request.precision),
            self.config.total_fraction() * self.config.total_risk * request.balance,
        );

        let plan = OrderPlan {
            entries,
            take_profits,
            stop_loss,
        };
        debug!(
            "plan: {} entries ({}), {} take-profits ({}), stop {} ({})",
            plan.entries.len(),
            plan.total_entry_size(),
            plan.take_profits.len(),
            plan.total_take_profit_size(),
            plan.stop_loss.price,
            plan.stop_loss.size
        );
        Ok(plan)
    }

    /// Pair prices with size fractions, then sort the lines by price.
    fn ladder(
        &self,
        prices: &[f64],
        reverse: bool,
        balance: f64,
        precision: u32,
    ) -> Vec<OrderLine> {
        let mut ordered = prices.to_vec();
        if reverse {
            ordered.reverse();
        }

        let mut lines: Vec<OrderLine> = ordered
            .into_iter()
            .zip(&self.config.order_sizes)
            .map(|(price, fraction)| {
                OrderLine::new(
                    round_to_precision(price, precision),
                    self.config.total_risk * fraction * balance,
                )
            })
            .collect();
        lines.sort_by(|a, b| a.price.total_cmp(&b.price));
        lines
    }
}

fn validate_inputs(request: &PlanRequest) -> Result<(), StrategyError> {
    let finite_fields = [
        ("entry_range.low", request.entry_range.low),
        ("entry_range.high", request.entry_range.high),
        ("current_price", request.current_price),
        ("stop_loss_price", request.stop_loss_price),
        ("balance", request.balance),
    ];
    if let Some(&(field, value)) = finite_fields.iter().find(|(_, v)| !v.is_finite()) {
        return Err(StrategyError::NonFinite { field, value });
    }

    if !request.entry_range.is_ordered() {
        return Err(StrategyError::InvertedRange {
            low: request.entry_range.low,
            high: request.entry_range.high,
        });
    }
    Ok(())
}
