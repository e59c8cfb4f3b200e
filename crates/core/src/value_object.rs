//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attributes. To "modify"
/// one, build a new value (every [`MonetaryAmount`](crate::MonetaryAmount)
/// operation returns a fresh amount).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
