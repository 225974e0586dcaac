use std::sync::Arc;

use storefront_core::MessageSink;

/// Notification channel capability.
pub trait Notifier: Send + Sync {
    fn send_notification(&self, message: &str);
}

/// Email channel.
#[derive(Debug, Clone)]
pub struct EmailNotifier {
    sink: Arc<dyn MessageSink>,
}

impl EmailNotifier {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self { sink }
    }
}

impl Notifier for EmailNotifier {
    fn send_notification(&self, message: &str) {
        self.sink.emit(&format!("email notification: {message}"));
    }
}

/// SMS channel.
#[derive(Debug, Clone)]
pub struct SmsNotifier {
    sink: Arc<dyn MessageSink>,
}

impl SmsNotifier {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self { sink }
    }
}

impl Notifier for SmsNotifier {
    fn send_notification(&self, message: &str) {
        self.sink.emit(&format!("sms notification: {message}"));
    }
}
