//! Entry-point generation — equally spaced prices inside the entry range.

use crate::domain::PriceRange;

/// Split the range into `num_orders + 1` equal segments and return the
/// `num_orders` interior boundaries, ascending.
///
/// The range is normalized first, so the endpoint order does not matter.
/// A zero-width range yields `num_orders` copies of its single price.
///
/// ```text
/// range [1.0, 1.5], 4 orders → step 0.1 → [1.1, 1.2, 1.3, 1.4]
/// ```
pub fn entry_points(range: PriceRange, num_orders: usize) -> Vec<f64> {
    let range = range.normalized();
    let step = (range.high - range.low) / (num_orders + 1) as f64;

    let mut points: Vec<f64> = (1..=num_orders)
        .map(|i| range.low + i as f64 * step)
        .collect();
    points.sort_by(|a, b| a.total_cmp(b));
    points
}
