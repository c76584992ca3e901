//! # Component Storage
//!
//! Dense, pre-allocated column of one component type.
//!
//! - All slots are allocated when the column is built
//! - Access is O(1) via actor index
//! - Iteration is cache-friendly (contiguous memory)

use std::ops::{Index, IndexMut};

use super::actor::ActorId;
use super::component::Component;

/// Pre-allocated storage for a single component type.
///
/// The column never grows after construction; the tick loop only
/// overwrites slots in place.
///
/// # Example
///
/// ```rust,ignore
/// let mut storage: ComponentStorage<Position> = ComponentStorage::new(1_000);
/// storage[ActorId::new(0)] = Position::new(1.0, 2.0);
/// ```
#[derive(Clone, Debug)]
pub struct ComponentStorage<C: Component> {
    data: Box<[C]>,
}

impl<C: Component> ComponentStorage<C> {
    /// Creates a column of `len` default-initialized slots.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![C::default(); len].into_boxed_slice(),
        }
    }

    /// Number of slots.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the column has no slots.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets a component by actor, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, id: ActorId) -> Option<&C> {
        self.data.get(id.index())
    }

    /// Returns a slice of all components.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[C] {
        &self.data
    }

    /// Returns the column's raw bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Size of one slot in bytes.
    #[inline]
    #[must_use]
    pub const fn element_bytes() -> usize {
        std::mem::size_of::<C>()
    }
}

impl<C: Component> FromIterator<C> for ComponentStorage<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<C: Component> Index<ActorId> for ComponentStorage<C> {
    type Output = C;

    #[inline]
    fn index(&self, id: ActorId) -> &C {
        &self.data[id.index()]
    }
}

impl<C: Component> IndexMut<ActorId> for ComponentStorage<C> {
    #[inline]
    fn index_mut(&mut self, id: ActorId) -> &mut C {
        &mut self.data[id.index()]
    }
}
