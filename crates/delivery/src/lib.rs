//! Delivery mode strategies.
//!
//! Implementations of [`DeliveryMethod`] for the supported fulfillment
//! channels. Each mode confirms the handoff with one fixed message.
//!
//! [`DeliveryMethod`]: storefront_orders::DeliveryMethod

pub mod delivery;

pub use delivery::{Courier, PickUpPoint, Post};
