use std::sync::Arc;

use storefront_core::MessageSink;
use storefront_orders::{DeliveryMethod, Order};

/// Door-to-door courier delivery.
#[derive(Debug, Clone)]
pub struct Courier {
    sink: Arc<dyn MessageSink>,
}

impl Courier {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self { sink }
    }
}

impl DeliveryMethod for Courier {
    fn deliver_order(&self, _order: &Order) {
        self.sink.emit("order delivered by courier");
    }
}

/// Postal delivery.
#[derive(Debug, Clone)]
pub struct Post {
    sink: Arc<dyn MessageSink>,
}

impl Post {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self { sink }
    }
}

impl DeliveryMethod for Post {
    fn deliver_order(&self, _order: &Order) {
        self.sink.emit("order delivered by post");
    }
}

/// Customer collection from a pickup point.
#[derive(Debug, Clone)]
pub struct PickUpPoint {
    sink: Arc<dyn MessageSink>,
}

impl PickUpPoint {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self { sink }
    }
}

impl DeliveryMethod for PickUpPoint {
    fn deliver_order(&self, _order: &Order) {
        self.sink.emit("order ready for pickup");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{OrderId, RecordingSink};

    fn test_order() -> Order {
        Order::new(OrderId::new())
    }

    fn recording() -> Arc<RecordingSink> {
        Arc::new(RecordingSink::new())
    }

    #[test]
    fn courier_confirms_its_mode() {
        let sink = recording();
        Courier::new(sink.clone()).deliver_order(&test_order());

        assert_eq!(sink.messages(), vec!["order delivered by courier"]);
    }

    #[test]
    fn post_confirms_its_mode() {
        let sink = recording();
        Post::new(sink.clone()).deliver_order(&test_order());

        assert_eq!(sink.messages(), vec!["order delivered by post"]);
    }

    #[test]
    fn pickup_point_confirms_its_mode() {
        let sink = recording();
        PickUpPoint::new(sink.clone()).deliver_order(&test_order());

        assert_eq!(sink.messages(), vec!["order ready for pickup"]);
    }

    #[test]
    fn modes_do_not_inspect_order_contents() {
        // Same message for an empty and a populated order.
        let sink_empty = recording();
        let sink_full = recording();

        let mut full = test_order();
        full.add_item("Laptop", 1, 1000.0);

        Courier::new(sink_empty.clone()).deliver_order(&test_order());
        Courier::new(sink_full.clone()).deliver_order(&full);

        assert_eq!(sink_empty.messages(), sink_full.messages());
    }
}
