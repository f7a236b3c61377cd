//! Price rounding to a fixed number of decimal places.

use crate::error::StrategyError;

/// Largest number of decimals `precision_for_tick` will report.
const MAX_TICK_DECIMALS: u32 = 12;

/// Every finite `f64` has at most this many fractional decimal digits.
const MAX_EXACT_DECIMALS: u32 = 1074;

/// Round `value` to `precision` decimal places.
///
/// Ties go to the even digit, judged on the exact binary value: `0.125`
/// rounds to `0.12`, while `2.675` (stored just below the tie) rounds to
/// `2.67`. Fixed-precision formatting is exact, so the decimal string is
/// correctly rounded before it is parsed back.
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    if !value.is_finite() || precision >= MAX_EXACT_DECIMALS {
        return value;
    }
    let prec = precision as usize;
    format!("{value:.prec$}").parse().unwrap_or(value)
}

/// Decimal places implied by a tick size.
///
/// `0.001 -> 3`, `0.25 -> 2`, `1.0 -> 0`, `5.0 -> 0`.
pub fn precision_for_tick(tick_size: f64) -> Result<u32, StrategyError> {
    if !tick_size.is_finite() || tick_size <= 0.0 {
        return Err(StrategyError::InvalidTickSize { tick_size });
    }

    for decimals in 0..=MAX_TICK_DECIMALS {
        let scaled = tick_size * 10f64.powi(decimals as i32);
        if (scaled - scaled.round()).abs() < 1e-9 * scaled.max(1.0) {
            return Ok(decimals);
        }
    }
    Ok(MAX_TICK_DECIMALS)
}
