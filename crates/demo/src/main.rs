use std::sync::Arc;

use storefront_core::{MessageSink, OrderId, TracingSink};
use storefront_delivery::Courier;
use storefront_discounts::PercentageDiscount;
use storefront_notifications::{EmailNotifier, Notifier};
use storefront_orders::Order;
use storefront_payments::CreditCard;

fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let sink: Arc<dyn MessageSink> = Arc::new(TracingSink);

    let mut order = Order::new(OrderId::new());
    order.add_item("Laptop", 1, 1000.0);
    order.add_item("Keyboard", 2, 50.0);

    order.set_payment_method(Arc::new(CreditCard::new(Arc::clone(&sink))));
    order.set_delivery_method(Arc::new(Courier::new(Arc::clone(&sink))));

    let total = order.calculate_total_price(Some(&PercentageDiscount::new(10.0)))?;
    tracing::info!(order_id = %order.id_typed(), total, "order total after discount");

    order.process_payment();
    order.deliver_order();

    let notifier = EmailNotifier::new(Arc::clone(&sink));
    notifier.send_notification("your order has been placed");

    Ok(())
}
