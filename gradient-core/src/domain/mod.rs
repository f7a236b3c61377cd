//! Domain types for order planning

pub mod ids;
pub mod plan;
pub mod range;
pub mod side;

pub use ids::ConfigFingerprint;
pub use plan::{OrderLine, OrderPlan};
pub use range::PriceRange;
pub use side::{Placement, Side};
