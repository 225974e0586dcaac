use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

/// Discount strategy applied to an order total at display time.
///
/// Implementations must be pure: same total in, same total out, no side
/// effects.
pub trait DiscountCalculator: Send + Sync {
    fn apply_discount(&self, total: f64) -> f64;
}

/// Identity strategy: the total passes through unchanged.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoDiscount;

impl ValueObject for NoDiscount {}

impl DiscountCalculator for NoDiscount {
    fn apply_discount(&self, total: f64) -> f64 {
        total
    }
}

/// Percentage-based discount.
///
/// The percentage is not clamped: values above 100 turn the total negative
/// and negative values increase it. Callers own the choice of percentage;
/// this type only applies the formula.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentageDiscount {
    percentage: f64,
}

impl PercentageDiscount {
    /// Percentage is expected in `[0, 100]` but deliberately unenforced.
    pub fn new(percentage: f64) -> Self {
        Self { percentage }
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }
}

impl ValueObject for PercentageDiscount {}

impl DiscountCalculator for PercentageDiscount {
    fn apply_discount(&self, total: f64) -> f64 {
        total * (1.0 - self.percentage / 100.0)
    }
}
