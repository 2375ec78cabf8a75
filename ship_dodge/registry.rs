//! Owning container for the live obstacles.
//!
//! A fixed pool of slots addressed by generational handles. Occupied slots
//! are chained by index in insertion order, so traversal always visits
//! obstacles oldest-first no matter which slots they landed in, and removal
//! by handle only relinks two neighbours.

use crate::piece::Piece;

/// Stable handle to an obstacle. Goes stale once that obstacle is removed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObstacleId {
    index: usize,
    generation: u32,
}

#[derive(Copy, Clone)]
struct Slot {
    piece: Piece,
    generation: u32,
    occupied: bool,
    prev: Option<usize>,
    next: Option<usize>,
}

impl Slot {
    const EMPTY: Self = Self {
        piece: Piece::EMPTY,
        generation: 0,
        occupied: false,
        prev: None,
        next: None,
    };
}

pub struct ObstacleRegistry<const N: usize> {
    slots: [Slot; N],
    head: Option<usize>,
    tail: Option<usize>,
    count: usize,
}

impl<const N: usize> Default for ObstacleRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ObstacleRegistry<N> {
    pub const fn new() -> Self {
        Self {
            slots: [Slot::EMPTY; N],
            head: None,
            tail: None,
            count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Link `piece` at the tail. Gives the piece back if every slot is taken.
    pub fn append(&mut self, piece: Piece) -> Result<ObstacleId, Piece> {
        let Some(index) = self.slots.iter().position(|slot| !slot.occupied) else {
            return Err(piece);
        };

        let tail = self.tail;
        let slot = &mut self.slots[index];
        slot.piece = piece;
        slot.occupied = true;
        slot.prev = tail;
        slot.next = None;
        let id = ObstacleId {
            index,
            generation: slot.generation,
        };

        match tail {
            Some(t) => self.slots[t].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.count += 1;
        Ok(id)
    }

    /// Unlink and return the obstacle behind `id`.
    ///
    /// Returns `None` without touching anything if `id` is stale.
    pub fn remove(&mut self, id: ObstacleId) -> Option<Piece> {
        if !self.contains(id) {
            return None;
        }

        let Slot { prev, next, piece, .. } = self.slots[id.index];
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }

        let slot = &mut self.slots[id.index];
        slot.occupied = false;
        slot.generation = slot.generation.wrapping_add(1);
        slot.prev = None;
        slot.next = None;
        self.count -= 1;
        Some(piece)
    }

    pub fn contains(&self, id: ObstacleId) -> bool {
        self.slots
            .get(id.index)
            .is_some_and(|slot| slot.occupied && slot.generation == id.generation)
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Piece> {
        if self.contains(id) {
            Some(&self.slots[id.index].piece)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, id: ObstacleId) -> Option<&mut Piece> {
        if self.contains(id) {
            Some(&mut self.slots[id.index].piece)
        } else {
            None
        }
    }

    /// Drop every obstacle. Outstanding handles all go stale.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut().filter(|slot| slot.occupied) {
            slot.occupied = false;
            slot.generation = slot.generation.wrapping_add(1);
            slot.prev = None;
            slot.next = None;
        }
        self.head = None;
        self.tail = None;
        self.count = 0;
    }

    /// Oldest-first traversal.
    pub fn iter(&self) -> Iter<'_, N> {
        Iter {
            registry: self,
            cursor: self.head,
        }
    }

    /// Oldest-first traversal with mutable access to each obstacle.
    pub fn for_each_mut<F: FnMut(ObstacleId, &mut Piece)>(&mut self, mut f: F) {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let slot = &mut self.slots[index];
            cursor = slot.next;
            let id = ObstacleId {
                index,
                generation: slot.generation,
            };
            f(id, &mut slot.piece);
        }
    }
}

pub struct Iter<'a, const N: usize> {
    registry: &'a ObstacleRegistry<N>,
    cursor: Option<usize>,
}

impl<'a, const N: usize> Iterator for Iter<'a, N> {
    type Item = (ObstacleId, &'a Piece);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let registry = self.registry;
        let slot = &registry.slots[index];
        self.cursor = slot.next;
        Some((
            ObstacleId {
                index,
                generation: slot.generation,
            },
            &slot.piece,
        ))
    }
}
