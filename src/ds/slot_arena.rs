//! Node storage for the recency list.
//!
//! Every cache entry sits in one slot of a `Vec`. Vacant slots are chained
//! through their own storage, so evicting an entry and inserting the next
//! one reuses the same slot instead of growing the vector. A full cache
//! therefore never holds more slots than its capacity.
//!
//! ```text
//!   slots: [ Occupied(a) | Vacant(next: None) | Occupied(c) | Vacant(next: 1) ]
//!   free_head: 3            next insert lands in slot 3, then slot 1
//! ```

/// Handle to an occupied slot, used as the link type of the recency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<usize> },
}

/// Vector of slots with an intrusive chain of vacant ones.
#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Stores `value`, taking the most recently vacated slot if there is one.
    pub fn insert(&mut self, value: T) -> SlotId {
        self.len += 1;
        if let Some(idx) = self.free_head {
            if let Slot::Vacant { next_free } = self.slots[idx] {
                self.free_head = next_free;
            }
            self.slots[idx] = Slot::Occupied(value);
            return SlotId(idx);
        }
        self.slots.push(Slot::Occupied(value));
        SlotId(self.slots.len() - 1)
    }

    /// Vacates `id` and returns what it held. `None` for a vacant slot.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        if let Slot::Vacant { .. } = slot {
            return None;
        }
        let vacated = std::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(id.0);
        self.len -= 1;
        match vacated {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        match self.slots.get(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        match self.slots.get_mut(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every entry and forgets all handles; the allocation is kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evict_then_insert_reuses_the_slot() {
        let mut arena = SlotArena::with_capacity(2);
        let lru = arena.insert(10u64);
        let _mru = arena.insert(20u64);

        assert_eq!(arena.remove(lru), Some(10));
        assert!(!arena.contains(lru));

        let next = arena.insert(30u64);
        assert_eq!(next.index(), lru.index());
        assert_eq!(arena.get(next), Some(&30));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn vacated_slots_are_reused_last_in_first_out() {
        let mut arena = SlotArena::new();
        let ids: Vec<_> = (0..4).map(|i| arena.insert(i)).collect();
        arena.remove(ids[1]);
        arena.remove(ids[3]);

        assert_eq!(arena.insert(7).index(), 3);
        assert_eq!(arena.insert(8).index(), 1);
        assert_eq!(arena.insert(9).index(), 4);
        assert_eq!(arena.len(), 5);
    }

    #[test]
    fn removing_a_vacant_slot_changes_nothing() {
        let mut arena = SlotArena::new();
        let id = arena.insert(1);
        assert_eq!(arena.remove(id), Some(1));
        assert_eq!(arena.remove(id), None);
        assert!(arena.is_empty());
        assert_eq!(arena.insert(2).index(), id.index());
    }

    #[test]
    fn reset_forgets_every_handle() {
        let mut arena = SlotArena::new();
        let ids: Vec<_> = (0..5).map(|i| arena.insert(i)).collect();
        arena.clear();
        assert!(arena.is_empty());
        assert!(ids.iter().all(|&id| arena.get(id).is_none()));
        assert_eq!(arena.insert(99).index(), 0);
    }
}
