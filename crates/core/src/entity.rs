//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Inventory records are entities: two snapshots of the same record carry the
/// same identifier even when their stock levels differ.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `other` denotes the same entity (identity, not value, equality).
    fn same_identity(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.id() == other.id()
    }
}
