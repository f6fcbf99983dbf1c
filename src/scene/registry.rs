use crate::{foundation::ids::ObjectId, stage::arena::ObjectRef};

const INITIAL_CAPACITY: usize = 12;

/// Insertion-ordered list of objects eligible for rendering.
///
/// Order is draw order: earlier entries are painted first. Duplicates are allowed;
/// membership is decided by object identity.
#[derive(Clone, Debug)]
pub struct ObjectRegistry {
    objects: Vec<ObjectRef>,
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectRegistry {
    /// Empty registry with a small preallocated capacity.
    pub fn new() -> Self {
        Self {
            objects: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Append an object.
    pub fn push(&mut self, object: ObjectRef) {
        self.objects.push(object);
    }

    /// Remove and return the last object.
    pub fn pop(&mut self) -> Option<ObjectRef> {
        self.objects.pop()
    }

    /// Object at `idx`, or `None` when out of range.
    pub fn get(&self, idx: usize) -> Option<ObjectRef> {
        self.objects.get(idx).copied()
    }

    /// Replace the object at `idx`. Out-of-range indices are ignored; returns whether
    /// the slot existed.
    pub fn set(&mut self, idx: usize, object: ObjectRef) -> bool {
        match self.objects.get_mut(idx) {
            Some(slot) => {
                *slot = object;
                true
            }
            None => false,
        }
    }

    /// Whether an object with this identity is registered.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.iter().any(|o| o.id() == id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Entries in draw order.
    pub fn iter(&self) -> impl Iterator<Item = ObjectRef> + '_ {
        self.objects.iter().copied()
    }

    /// Drop every entry and release the backing storage.
    pub fn clear(&mut self) {
        self.objects = Vec::new();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/registry.rs"]
mod tests;
