//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. In this workspace `Invoice` is the main example: once
/// generated, its number and payment link never change.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
