use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, OrderId, ValueObject};
use storefront_discounts::{DiscountCalculator, NoDiscount};
use storefront_payments::PaymentMethod;

/// Order line: product, quantity, unit price.
///
/// Quantity and price are accepted as given; zero and negative values pass
/// through unvalidated and flow into the total like any other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub line_no: u32,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
}

impl ValueObject for OrderItem {}

/// Delivery mode capability.
///
/// The contract receives the full order so future modes can inspect its
/// contents; the current modes emit one fixed message each and ignore it.
pub trait DeliveryMethod: Send + Sync {
    fn deliver_order(&self, order: &Order);
}

/// Aggregate root: a single retail order.
///
/// Items grow append-only in insertion order. The payment and delivery
/// strategies are optional and attached after construction; invoking an
/// operation whose strategy is unset is a silent no-op. Totals are never
/// cached: every computation reads the current items.
pub struct Order {
    id: OrderId,
    items: Vec<OrderItem>,
    payment_method: Option<Arc<dyn PaymentMethod>>,
    delivery_method: Option<Arc<dyn DeliveryMethod>>,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Create an empty order with no strategies attached.
    pub fn new(id: OrderId) -> Self {
        Self {
            id,
            items: Vec::new(),
            payment_method: None,
            delivery_method: None,
            created_at: Utc::now(),
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn payment_method(&self) -> Option<&dyn PaymentMethod> {
        self.payment_method.as_deref()
    }

    pub fn delivery_method(&self) -> Option<&dyn DeliveryMethod> {
        self.delivery_method.as_deref()
    }

    pub fn set_payment_method(&mut self, payment_method: Arc<dyn PaymentMethod>) {
        self.payment_method = Some(payment_method);
    }

    pub fn set_delivery_method(&mut self, delivery_method: Arc<dyn DeliveryMethod>) {
        self.delivery_method = Some(delivery_method);
    }

    /// Append a line item. No validation is performed.
    pub fn add_item(
        &mut self,
        product_name: impl Into<String>,
        quantity: i64,
        unit_price: f64,
    ) {
        let line_no = (self.items.len() as u32) + 1;
        self.items.push(OrderItem {
            line_no,
            product_name: product_name.into(),
            quantity,
            unit_price,
        });
    }

    /// Undiscounted sum of `quantity × unit_price` over all items, in
    /// insertion order, accumulated as `f64`.
    pub fn subtotal(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.quantity as f64 * item.unit_price)
            .sum()
    }

    /// Total after applying the given discount strategy to the subtotal.
    ///
    /// The calculator is required; passing `None` is the one argument error
    /// in this domain. The result is never cached.
    pub fn calculate_total_price(
        &self,
        discount_calculator: Option<&dyn DiscountCalculator>,
    ) -> DomainResult<f64> {
        let discount_calculator = discount_calculator
            .ok_or_else(|| DomainError::validation("discount calculator is required"))?;
        Ok(discount_calculator.apply_discount(self.subtotal()))
    }

    /// Charge the attached payment method; silent no-op when none is set.
    ///
    /// The billed amount is always the undiscounted total, recomputed here
    /// through [`NoDiscount`]. A discount a caller applied for display does
    /// not carry over to the charge.
    pub fn process_payment(&self) {
        let Some(payment_method) = self.payment_method.as_deref() else {
            return;
        };

        let amount = NoDiscount.apply_discount(self.subtotal());
        payment_method.process_payment(amount);
    }

    /// Hand the order to the attached delivery method; silent no-op when
    /// none is set.
    pub fn deliver_order(&self) {
        if let Some(delivery_method) = self.delivery_method.as_deref() {
            delivery_method.deliver_order(self);
        }
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("id", &self.id)
            .field("items", &self.items)
            .field("payment_method", &self.payment_method.as_ref().map(|_| ".."))
            .field("delivery_method", &self.delivery_method.as_ref().map(|_| ".."))
            .field("created_at", &self.created_at)
            .finish()
    }
}
