use std::collections::VecDeque;

use crate::{foundation::ids::AnimationId, stage::arena::AnimRef};

const INITIAL_CAPACITY: usize = 12;

/// FIFO of animations waiting to be activated.
#[derive(Clone, Debug)]
pub struct AnimationQueue {
    pending: VecDeque<AnimRef>,
}

impl Default for AnimationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationQueue {
    /// Empty queue with a small preallocated capacity.
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Enqueue at the tail.
    pub fn push(&mut self, anim: AnimRef) {
        self.pending.push_back(anim);
    }

    /// Dequeue from the head.
    pub fn pop_front(&mut self) -> Option<AnimRef> {
        self.pending.pop_front()
    }

    /// Remove from the tail.
    pub fn pop_back(&mut self) -> Option<AnimRef> {
        self.pending.pop_back()
    }

    /// Animation at `idx` counted from the head, or `None` when out of range.
    pub fn get(&self, idx: usize) -> Option<AnimRef> {
        self.pending.get(idx).copied()
    }

    /// Replace the animation at `idx`. Out-of-range indices are ignored; returns whether
    /// the slot existed.
    pub fn set(&mut self, idx: usize, anim: AnimRef) -> bool {
        match self.pending.get_mut(idx) {
            Some(slot) => {
                *slot = anim;
                true
            }
            None => false,
        }
    }

    /// Whether an animation with this identity is queued.
    pub fn contains(&self, id: AnimationId) -> bool {
        self.pending.iter().any(|a| a.id() == id)
    }

    /// Number of queued animations.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Queued animations from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = AnimRef> + '_ {
        self.pending.iter().copied()
    }

    /// Drop every entry and release the backing storage.
    pub fn clear(&mut self) {
        self.pending = VecDeque::new();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/queue.rs"]
mod tests;
