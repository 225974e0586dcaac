//! Discount calculation strategies.
//!
//! Pure arithmetic over order totals; no IO, no state, no side effects.

pub mod discount;

pub use discount::{DiscountCalculator, NoDiscount, PercentageDiscount};
