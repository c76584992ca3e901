//! # Actors
//!
//! Actors are identified by their slot index. The population never grows or
//! shrinks, so an index stays valid for the whole run and no generation
//! counter is needed.

use std::fmt;

use crate::component::{Position, Record, Target, Velocity, Vitals};

/// Index of an actor inside its population.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ActorId(u32);

impl ActorId {
    /// Null/invalid actor ID.
    pub const NULL: Self = Self(u32::MAX);

    /// Largest population an `ActorId` can address.
    pub const MAX_POPULATION: usize = u32::MAX as usize;

    /// Creates an ID from a slot index.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `index` does not fit below [`ActorId::NULL`].
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(index: usize) -> Self {
        debug_assert!(index < Self::MAX_POPULATION, "actor index out of range");
        Self(index as u32)
    }

    /// Rebuilds an ID from its raw value.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Checks if this ID is null.
    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == u32::MAX
    }

    /// Iterates every ID of a population of `count` actors, in slot order.
    pub fn all(count: usize) -> impl Iterator<Item = Self> {
        (0..count).map(Self::new)
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The complete, layout-independent state of one actor.
///
/// Layouts are built from a list of these and can be snapshotted back into
/// one, which is how layouts are compared against each other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActorState {
    /// Health, visibility and state timer.
    pub vitals: Vitals,
    /// Arena position.
    pub position: Position,
    /// Movement per second.
    pub velocity: Velocity,
    /// Current attack target.
    pub target: Target,
    /// Name and experience.
    pub record: Record,
}

impl ActorState {
    /// Returns true while the actor has health left.
    #[inline]
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.vitals.is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_id_roundtrip() {
        let id = ActorId::new(12_345);
        assert_eq!(id.index(), 12_345);
        assert_eq!(ActorId::from_raw(id.raw()), id);
        assert!(!id.is_null());
        assert!(ActorId::default().is_null());
    }

    #[test]
    fn test_all_yields_slot_order() {
        let ids: Vec<_> = ActorId::all(3).map(ActorId::index).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_display() {
        assert_eq!(ActorId::new(7).to_string(), "#7");
    }
}
