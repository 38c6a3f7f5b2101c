//! Value object trait: equality by value, not identity.
//!
//! Derived results of the health pipeline (status buckets, reports, alerts)
//! carry no identity of their own: two reports computed from the same snapshot
//! are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Recomputing one
/// from the same inputs must yield an equal value, which is what makes the
/// derived inventory views safe to replace wholesale on every data change.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Horizon { days: u32 }
///
/// impl ValueObject for Horizon {}
///
/// assert_eq!(Horizon { days: 30 }, Horizon { days: 30 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
