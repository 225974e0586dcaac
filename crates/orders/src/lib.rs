//! Retail order domain module.
//!
//! This crate contains the order aggregate and its line items, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). The
//! aggregate stays ignorant of concrete payment/delivery/discount
//! implementations; it depends only on the capability traits.

pub mod order;

pub use order::{DeliveryMethod, Order, OrderItem};
