//! Payment channel strategies.
//!
//! Every channel confirms the charge through an injected [`MessageSink`];
//! processing is modeled as always succeeding, so there is no error path.
//!
//! [`MessageSink`]: storefront_core::MessageSink

pub mod payment;

pub use payment::{BankTransfer, CreditCard, PayPal, PaymentMethod};
