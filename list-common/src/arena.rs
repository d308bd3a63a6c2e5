//! # Slot Arena
//!
//! Typed slot storage with index-based references. Nodes of a linked chain
//! live here and point at each other by [`ArenaId`] instead of by pointer.
//!
//! Unlike a bump arena, slots can be released with [`Arena::remove`]. A
//! released slot goes onto a free list and is handed out again by the next
//! [`Arena::alloc`]. Each slot carries a generation that `remove` bumps, so
//! an id kept from before the removal never resolves to the slot's new value.
//!
//! ## Example
//!
//! ```
//! use list_common::arena::{Arena, ArenaId};
//!
//! #[derive(Debug)]
//! struct Node {
//!     value: i64,
//!     next: Option<ArenaId<Node>>,
//! }
//!
//! let mut arena: Arena<Node> = Arena::new();
//!
//! let second = arena.alloc(Node { value: 2, next: None });
//! let first = arena.alloc(Node { value: 1, next: Some(second) });
//!
//! assert_eq!(arena.get(first).next, Some(second));
//!
//! // Unlink and release the second node
//! arena.get_mut(first).next = None;
//! assert_eq!(arena.remove(second).map(|n| n.value), Some(2));
//! assert!(arena.try_get(second).is_none());
//! ```

use std::marker::PhantomData;

/// A type-safe, generational index into an [`Arena`].
///
/// A slot index plus the generation the slot had when the id was handed out.
/// The `PhantomData<T>` keeps ids of different arenas from being mixed up at
/// compile time.
pub struct ArenaId<T> {
    index: usize,
    generation: u32,
    _marker: PhantomData<T>,
}

// Manual implementations to avoid requiring T: Clone/Copy/etc.
impl<T> std::fmt::Debug for ArenaId<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ArenaId")
            .field(&self.index)
            .field(&self.generation)
            .finish()
    }
}

impl<T> Clone for ArenaId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArenaId<T> {}

impl<T> PartialEq for ArenaId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for ArenaId<T> {}

impl<T> std::hash::Hash for ArenaId<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T> ArenaId<T> {
    fn new(index: usize, generation: u32) -> Self {
        Self {
            index,
            generation,
            _marker: PhantomData,
        }
    }

    /// Returns the raw slot index of this id.
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Slot storage for values of type `T`.
///
/// Live values are addressed by [`ArenaId<T>`]. Removing a value leaves a
/// vacant slot that later allocations reuse, so the backing `Vec` only grows
/// to the peak number of live values.
#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    /// Creates a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Stores `value` and returns its id, reusing a vacant slot if there is one.
    ///
    /// ```
    /// use list_common::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let id = arena.alloc(42);
    /// assert_eq!(arena.get(id), &42);
    /// ```
    pub fn alloc(&mut self, value: T) -> ArenaId<T> {
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.value = Some(value);
                ArenaId::new(index, slot.generation)
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    value: Some(value),
                });
                ArenaId::new(self.slots.len() - 1, 0)
            }
        }
    }

    /// Takes the value out of its slot, marks the slot vacant and retires
    /// every id handed out for it.
    ///
    /// Returns `None` if the id is stale or out of bounds.
    pub fn remove(&mut self, id: ArenaId<T>) -> Option<T> {
        let slot = self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)?;
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Some(value)
    }

    /// Returns a reference to the value at the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id is stale or belongs to a different arena.
    #[must_use]
    pub fn get(&self, id: ArenaId<T>) -> &T {
        match self.try_get(id) {
            Some(value) => value,
            None => panic!("arena id {} does not refer to a live slot", id.index),
        }
    }

    /// Returns a mutable reference to the value at the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id is stale or belongs to a different arena.
    #[must_use]
    pub fn get_mut(&mut self, id: ArenaId<T>) -> &mut T {
        let live = self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.value.as_mut());
        match live {
            Some(value) => value,
            None => panic!("arena id {} does not refer to a live slot", id.index),
        }
    }

    /// Tries to get a reference to the value, returning `None` if the id is stale.
    #[must_use]
    pub fn try_get(&self, id: ArenaId<T>) -> Option<&T> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    /// Returns the number of live values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no value is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_get() {
        let mut arena: Arena<i64> = Arena::new();
        let id1 = arena.alloc(10);
        let id2 = arena.alloc(20);

        assert_eq!(arena.get(id1), &10);
        assert_eq!(arena.get(id2), &20);
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = Arena::new();
        let id = arena.alloc(String::from("head"));

        arena.get_mut(id).push_str(" node");
        assert_eq!(arena.get(id), "head node");
    }

    #[test]
    fn test_remove_releases_slot() {
        let mut arena = Arena::new();
        let a = arena.alloc('a');
        let b = arena.alloc('b');

        assert_eq!(arena.remove(a), Some('a'));
        assert_eq!(arena.len(), 1);
        assert!(arena.try_get(a).is_none());
        assert_eq!(arena.try_get(b), Some(&'b'));

        // Removing twice is harmless
        assert_eq!(arena.remove(a), None);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_vacant_slot_is_reused() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        arena.alloc(2);
        arena.remove(a);

        let c = arena.alloc(3);
        assert_eq!(c.index(), a.index());
        assert_eq!(arena.get(c), &3);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_stale_id_does_not_reach_reused_slot() {
        let mut arena = Arena::new();
        let old = arena.alloc("old");
        arena.remove(old);
        let new = arena.alloc("new");

        assert_eq!(new.index(), old.index());
        assert_ne!(new, old);
        assert_eq!(arena.try_get(old), None);
        assert_eq!(arena.remove(old), None);
        assert_eq!(arena.get(new), &"new");
        assert_eq!(arena.len(), 1);
    }

    #[test]
    #[should_panic(expected = "does not refer to a live slot")]
    fn test_get_stale_id_panics() {
        let mut arena = Arena::new();
        let id = arena.alloc(7);
        arena.remove(id);
        let _ = arena.get(id);
    }

    #[test]
    #[should_panic(expected = "does not refer to a live slot")]
    fn test_get_mut_stale_id_after_reuse_panics() {
        let mut arena = Arena::new();
        let id = arena.alloc(7);
        arena.remove(id);
        arena.alloc(8);
        *arena.get_mut(id) += 1;
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut arena: Arena<i64> = Arena::new();
        assert!(arena.is_empty());

        let id = arena.alloc(1);
        arena.alloc(2);
        assert_eq!(arena.len(), 2);

        arena.remove(id);
        assert_eq!(arena.len(), 1);
        assert!(!arena.is_empty());
    }
}
