//! Generational arena.
//!
//! The Arena owns a set of values, each stored in a Slot addressed by a `SlotIndex`. A `SlotIndex` pairs the position of
//! the slot with the generation of its occupant: removing the occupant bumps the generation of the slot, so that any
//! outstanding `SlotIndex` to it is recognized as stale instead of aliasing the next occupant.
//!
//! Vacant slots are threaded into a free-list, and reused in LIFO order.

use core::mem;

use alloc::vec::Vec;

/// SlotIndex.
///
/// A stable index within an Arena; valid for as long as its occupant is not removed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) struct SlotIndex {
    position: usize,
    generation: u32,
}

impl SlotIndex {
    /// Returns the position of the slot within the Arena.
    #[cfg(test)]
    pub(crate) fn position(&self) -> usize { self.position }
}

/// Arena.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    occupied: usize,
}

impl<T> Arena<T> {
    /// Creates an empty instance, with room for `capacity` values.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { slots: Vec::with_capacity(capacity), free: None, occupied: 0 }
    }

    /// Returns the number of values in the Arena.
    pub(crate) fn len(&self) -> usize { self.occupied }

    /// Returns the number of slots the Arena can hold without reallocating.
    pub(crate) fn capacity(&self) -> usize { self.slots.capacity() }

    /// Returns whether `index` refers to a live value.
    pub(crate) fn contains(&self, index: SlotIndex) -> bool { self.get(index).is_some() }

    /// Returns a reference to the value at `index`, if still live.
    pub(crate) fn get(&self, index: SlotIndex) -> Option<&T> {
        let slot = self.slots.get(index.position)?;

        match &slot.entry {
            Entry::Occupied(value) if slot.generation == index.generation => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value at `index`, if still live.
    pub(crate) fn get_mut(&mut self, index: SlotIndex) -> Option<&mut T> {
        let slot = self.slots.get_mut(index.position)?;

        match &mut slot.entry {
            Entry::Occupied(value) if slot.generation == index.generation => Some(value),
            _ => None,
        }
    }

    /// Inserts `value`, reusing the most recently vacated slot if any.
    pub(crate) fn insert(&mut self, value: T) -> SlotIndex {
        let position = match self.free {
            Some(position) => position,
            None => {
                self.slots.push(Slot { generation: 0, entry: Entry::Vacant(None) });
                self.slots.len() - 1
            },
        };

        let slot = &mut self.slots[position];

        if let Entry::Vacant(next_free) = slot.entry {
            self.free = next_free;
        }

        debug_assert!(matches!(slot.entry, Entry::Vacant(_)), "Free-list points to an occupied slot");

        slot.entry = Entry::Occupied(value);
        self.occupied += 1;

        SlotIndex { position, generation: slot.generation }
    }

    /// Removes the value at `index`, if still live, and returns it.
    ///
    /// After the call, `index` and all its copies are stale.
    pub(crate) fn remove(&mut self, index: SlotIndex) -> Option<T> {
        let slot = self.slots.get_mut(index.position)?;

        if slot.generation != index.generation || !matches!(slot.entry, Entry::Occupied(_)) {
            return None;
        }

        let entry = mem::replace(&mut slot.entry, Entry::Vacant(self.free));

        //  Wraps after 2^32 reuses of a single slot, at which point a very old index could alias again.
        slot.generation = slot.generation.wrapping_add(1);

        self.free = Some(index.position);
        self.occupied -= 1;

        match entry {
            Entry::Occupied(value) => Some(value),
            Entry::Vacant(_) => None,
        }
    }

    /// Removes all values, keeping the allocated slots.
    ///
    /// All outstanding indexes become stale.
    pub(crate) fn clear(&mut self) {
        let mut free = None;

        for (position, slot) in self.slots.iter_mut().enumerate().rev() {
            if let Entry::Occupied(_) = slot.entry {
                slot.generation = slot.generation.wrapping_add(1);
            }

            slot.entry = Entry::Vacant(free);
            free = Some(position);
        }

        self.free = free;
        self.occupied = 0;
    }
}

//
//  Implementation
//

struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

enum Entry<T> {
    Occupied(T),
    //  Position of the next vacant slot, if any.
    Vacant(Option<usize>),
}

// mod tests
