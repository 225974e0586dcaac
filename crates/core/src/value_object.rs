//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attribute values are interchangeable. An order line of
/// `("Keyboard", 2, 50.0)` is the same line wherever it appears; a whole
/// order is not, because orders carry identity (see [`crate::Entity`]).
///
/// To "modify" a value object, construct a new one. The trait bounds keep
/// implementations cheap to copy, comparable, and debuggable:
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Percentage(f64);
///
/// impl ValueObject for Percentage {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
