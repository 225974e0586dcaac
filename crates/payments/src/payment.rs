use std::sync::Arc;

use storefront_core::MessageSink;

/// Payment channel capability.
///
/// The amount is taken as-is: zero and negative amounts are processed exactly
/// like positive ones. There is no return value, no retry and no error
/// signaling; the only observable effect is one confirmation emitted to the
/// channel's sink.
pub trait PaymentMethod: Send + Sync {
    fn process_payment(&self, amount: f64);
}

/// Charge via credit card.
#[derive(Debug, Clone)]
pub struct CreditCard {
    sink: Arc<dyn MessageSink>,
}

impl CreditCard {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self { sink }
    }
}

impl PaymentMethod for CreditCard {
    fn process_payment(&self, amount: f64) {
        self.sink
            .emit(&format!("payment of {amount:.2} processed via credit card"));
    }
}

/// Charge via PayPal.
#[derive(Debug, Clone)]
pub struct PayPal {
    sink: Arc<dyn MessageSink>,
}

impl PayPal {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self { sink }
    }
}

impl PaymentMethod for PayPal {
    fn process_payment(&self, amount: f64) {
        self.sink
            .emit(&format!("payment of {amount:.2} processed via PayPal"));
    }
}

/// Charge via bank transfer.
#[derive(Debug, Clone)]
pub struct BankTransfer {
    sink: Arc<dyn MessageSink>,
}

impl BankTransfer {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self { sink }
    }
}

impl PaymentMethod for BankTransfer {
    fn process_payment(&self, amount: f64) {
        self.sink
            .emit(&format!("payment of {amount:.2} processed via bank transfer"));
    }
}
