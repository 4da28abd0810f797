//! Entity marker: identity that survives state changes.

/// An object with a stable identity.
///
/// Two entities are the same thing when their identifiers match, whatever
/// their attribute state. `Batch` is the only entity in this domain — its
/// dose counters change while its identity does not; everything else here is
/// a value object.
pub trait Entity {
    /// Identifier type; hashable so stores can key maps by it.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
