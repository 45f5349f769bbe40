//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same id are the same thing, whatever their other
/// attributes say (a good renamed between deliveries is still the same good).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison, ignoring every non-id attribute.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
