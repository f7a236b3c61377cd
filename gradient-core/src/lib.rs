//! Gradient Core — laddered order plans for directional signals.
//!
//! Given a signal direction, an entry range, take-profit targets, a stop-loss,
//! the current price and a balance, this crate computes:
//! - Equally spaced entry prices inside the entry range
//! - Entry and take-profit lines sized from the configured risk fractions
//! - A stop-loss line covering the whole position
//!
//! Everything is pure computation: no I/O besides optional config loading.

pub mod config;
pub mod domain;
pub mod error;
pub mod ladder;
pub mod planner;
pub mod rounding;

pub use config::{ConfigError, StrategyConfig};
pub use domain::{ConfigFingerprint, OrderLine, OrderPlan, Placement, PriceRange, Side};
pub use error::StrategyError;
pub use planner::{DynamicGradientEntry, PairingRule, PlanRequest};
pub use rounding::{precision_for_tick, round_to_precision};
