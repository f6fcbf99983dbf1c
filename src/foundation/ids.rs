use crate::foundation::error::{ReelError, ReelResult};

/// Identity of a visual object, unique within one [`IdAllocator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ObjectId(pub(crate) u32);

/// Identity of an animation, unique within one [`IdAllocator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct AnimationId(pub(crate) u32);

impl ObjectId {
    /// Raw numeric id.
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl AnimationId {
    /// Raw numeric id.
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl std::fmt::Display for AnimationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source for objects and animations.
///
/// Ids start at 1 and are never reused. Each [`crate::Stage`] owns one allocator,
/// so two sessions never share a counter.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    last_object: u32,
    last_animation: u32,
}

impl IdAllocator {
    /// Fresh allocator; the first ids handed out are `#1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next object id.
    pub fn next_object(&mut self) -> ReelResult<ObjectId> {
        self.last_object = self
            .last_object
            .checked_add(1)
            .ok_or_else(|| ReelError::validation("object id space exhausted"))?;
        Ok(ObjectId(self.last_object))
    }

    /// Allocate the next animation id.
    pub fn next_animation(&mut self) -> ReelResult<AnimationId> {
        self.last_animation = self
            .last_animation
            .checked_add(1)
            .ok_or_else(|| ReelError::validation("animation id space exhausted"))?;
        Ok(AnimationId(self.last_animation))
    }
}
