//! Customer notification channels.
//!
//! Notifiers are invoked by the caller directly; the order aggregate knows
//! nothing about them.

pub mod notification;

pub use notification::{EmailNotifier, Notifier, SmsNotifier};
