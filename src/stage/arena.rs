use std::sync::atomic::{AtomicU32, Ordering};

use crate::{
    animation::ease::Ease,
    animation::model::{Animation, AnimationKind, Interp, MoveSpec},
    animation::state,
    foundation::core::Point,
    foundation::error::{ReelError, ReelResult},
    foundation::ids::{AnimationId, IdAllocator, ObjectId},
    object::media::{Image, Text},
    object::model::{Object, ObjectKind},
    object::shapes::{Circle, Rectangle},
    resources::loader::TextureHandle,
    scene::registry::ObjectRegistry,
};

static NEXT_STAGE: AtomicU32 = AtomicU32::new(1);

/// Token naming the stage a handle was issued by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct StageToken(u32);

impl StageToken {
    fn fresh() -> Self {
        Self(NEXT_STAGE.fetch_add(1, Ordering::Relaxed))
    }
}

/// Non-owning handle to an object stored in a [`Stage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    pub(crate) stage: StageToken,
    pub(crate) index: usize,
    pub(crate) id: ObjectId,
}

impl ObjectRef {
    /// Identity of the referenced object.
    pub fn id(self) -> ObjectId {
        self.id
    }
}

/// Non-owning handle to an animation stored in a [`Stage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimRef {
    pub(crate) stage: StageToken,
    pub(crate) index: usize,
    pub(crate) id: AnimationId,
}

impl AnimRef {
    /// Identity of the referenced animation.
    pub fn id(self) -> AnimationId {
        self.id
    }
}

/// Default reveal duration for shapes, in seconds.
pub const DEFAULT_SHAPE_DURATION: f64 = 0.7;
/// Default fade-in duration for images, in seconds.
pub const DEFAULT_IMAGE_DURATION: f64 = 1.0;

/// Owner of every object and animation in a playback session.
///
/// The stage is an append-only arena: handles stay valid for as long as the stage
/// lives, and ids come from the stage's own [`IdAllocator`]. Handles also carry the
/// issuing stage's token, so a handle never resolves against a different stage. A
/// [`crate::Scene`] keeps only handles and borrows the stage on every update and render.
#[derive(Debug)]
pub struct Stage {
    token: StageToken,
    ids: IdAllocator,
    objects: Vec<Object>,
    animations: Vec<Animation>,
    placeholder: Option<ObjectRef>,
}

impl Default for Stage {
    fn default() -> Self {
        Self {
            token: StageToken::fresh(),
            ids: IdAllocator::new(),
            objects: Vec::new(),
            animations: Vec::new(),
            placeholder: None,
        }
    }
}

impl Stage {
    /// Empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of objects owned by the stage.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Number of animations owned by the stage.
    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    /// Look up an object.
    pub fn object(&self, r: ObjectRef) -> Option<&Object> {
        if r.stage != self.token {
            return None;
        }
        self.objects.get(r.index).filter(|o| o.id() == r.id)
    }

    /// Look up an object for mutation.
    pub fn object_mut(&mut self, r: ObjectRef) -> Option<&mut Object> {
        if r.stage != self.token {
            return None;
        }
        self.objects.get_mut(r.index).filter(|o| o.id() == r.id)
    }

    /// Look up an animation.
    pub fn animation(&self, r: AnimRef) -> Option<&Animation> {
        if r.stage != self.token {
            return None;
        }
        self.animations.get(r.index).filter(|a| a.id() == r.id)
    }

    /// Look up an animation for mutation.
    pub fn animation_mut(&mut self, r: AnimRef) -> Option<&mut Animation> {
        if r.stage != self.token {
            return None;
        }
        self.animations.get_mut(r.index).filter(|a| a.id() == r.id)
    }

    fn check_stage(
        &self,
        stage: StageToken,
        what: &str,
        id: impl std::fmt::Display,
    ) -> ReelResult<()> {
        if stage != self.token {
            return Err(ReelError::playback(format!("{what} {id} belongs to another stage")));
        }
        Ok(())
    }

    pub(crate) fn try_object(&self, r: ObjectRef) -> ReelResult<&Object> {
        self.check_stage(r.stage, "object", r.id)?;
        self.object(r)
            .ok_or_else(|| ReelError::playback(format!("object {} is not on this stage", r.id)))
    }

    pub(crate) fn try_object_mut(&mut self, r: ObjectRef) -> ReelResult<&mut Object> {
        self.check_stage(r.stage, "object", r.id)?;
        self.object_mut(r)
            .ok_or_else(|| ReelError::playback(format!("object {} is not on this stage", r.id)))
    }

    pub(crate) fn try_animation(&self, r: AnimRef) -> ReelResult<&Animation> {
        self.check_stage(r.stage, "animation", r.id)?;
        self.animation(r).ok_or_else(|| {
            ReelError::playback(format!("animation {} is not on this stage", r.id))
        })
    }

    pub(crate) fn try_animation_mut(&mut self, r: AnimRef) -> ReelResult<&mut Animation> {
        self.check_stage(r.stage, "animation", r.id)?;
        self.animation_mut(r).ok_or_else(|| {
            ReelError::playback(format!("animation {} is not on this stage", r.id))
        })
    }

    /// Add an object of any kind.
    pub fn add_object(&mut self, position: Point, kind: ObjectKind) -> ReelResult<ObjectRef> {
        let id = self.ids.next_object()?;
        let r = ObjectRef {
            stage: self.token,
            index: self.objects.len(),
            id,
        };
        self.objects.push(Object::new(id, position, kind));
        Ok(r)
    }

    /// Add a circle centered on `center`.
    pub fn circle(&mut self, center: Point, radius: f64) -> ReelResult<ObjectRef> {
        self.add_object(center, ObjectKind::Circle(Circle::new(radius)))
    }

    /// Add a rectangle with its top-left corner at `origin`.
    pub fn rectangle(&mut self, origin: Point, width: f64, height: f64) -> ReelResult<ObjectRef> {
        self.add_object(origin, ObjectKind::Rectangle(Rectangle::new(width, height)))
    }

    /// Add a square with its top-left corner at `origin`.
    pub fn square(&mut self, origin: Point, side: f64) -> ReelResult<ObjectRef> {
        self.add_object(origin, ObjectKind::Rectangle(Rectangle::square(side)))
    }

    /// Add a text object anchored at `origin`.
    pub fn text(&mut self, origin: Point, content: impl Into<String>) -> ReelResult<ObjectRef> {
        self.add_object(origin, ObjectKind::Text(Text::new(content)))
    }

    /// Add an image anchored at `origin`.
    pub fn image(&mut self, origin: Point, texture: TextureHandle) -> ReelResult<ObjectRef> {
        self.add_object(origin, ObjectKind::Image(Image::new(texture)))
    }

    /// Shared empty object targeted by every wait animation on this stage.
    pub fn placeholder(&mut self) -> ReelResult<ObjectRef> {
        if let Some(r) = self.placeholder {
            return Ok(r);
        }
        let r = self.add_object(Point::ZERO, ObjectKind::Empty)?;
        self.placeholder = Some(r);
        Ok(r)
    }

    fn push_animation(
        &mut self,
        target: Option<ObjectRef>,
        duration: f64,
        kind: AnimationKind,
    ) -> ReelResult<AnimRef> {
        let id = self.ids.next_animation()?;
        let anim = Animation::new(id, target, duration, kind)?;
        let r = AnimRef {
            stage: self.token,
            index: self.animations.len(),
            id,
        };
        self.animations.push(anim);
        Ok(r)
    }

    /// Default reveal of `target` with the kind's natural duration.
    pub fn animate(&mut self, target: ObjectRef) -> ReelResult<AnimRef> {
        let duration = match self.object(target).map(|o| &o.kind) {
            Some(ObjectKind::Text(t)) => t.natural_duration(),
            Some(ObjectKind::Image(_)) => DEFAULT_IMAGE_DURATION,
            Some(ObjectKind::Empty) => 0.0,
            _ => DEFAULT_SHAPE_DURATION,
        };
        self.animate_with(target, duration, Interp::Reveal)
    }

    /// Default reveal of `target` over `duration` seconds.
    pub fn animate_for(&mut self, target: ObjectRef, duration: f64) -> ReelResult<AnimRef> {
        self.animate_with(target, duration, Interp::Reveal)
    }

    /// Simple animation of `target` driven by `interp`.
    pub fn animate_with(
        &mut self,
        target: ObjectRef,
        duration: f64,
        interp: Interp,
    ) -> ReelResult<AnimRef> {
        if self.object(target).is_none() {
            return Err(ReelError::validation(format!(
                "animation target {} is not on this stage",
                target.id
            )));
        }
        self.push_animation(
            Some(target),
            duration,
            AnimationKind::Simple {
                interp,
                ease: Ease::Linear,
            },
        )
    }

    /// Animation that only occupies `duration` seconds of the timeline.
    pub fn wait(&mut self, duration: f64) -> ReelResult<AnimRef> {
        let placeholder = self.placeholder()?;
        self.animate_with(placeholder, duration, Interp::Hold)
    }

    /// Zero-duration animation that hides `target`.
    pub fn disappear(&mut self, target: ObjectRef) -> ReelResult<AnimRef> {
        self.animate_with(target, 0.0, Interp::Disappear)
    }

    /// Parallel group over `children`.
    ///
    /// Fails on an empty list, a child not on this stage, or any animation reachable
    /// through more than one child (directly, or nested in a sync group or move).
    pub fn sync(&mut self, children: &[AnimRef]) -> ReelResult<AnimRef> {
        if children.is_empty() {
            return Err(ReelError::validation("sync needs at least one child"));
        }
        let mut seen = Vec::new();
        for child in children {
            if self.animation(*child).is_none() {
                return Err(ReelError::validation(format!(
                    "sync child {} is not on this stage",
                    child.id
                )));
            }
            let mut reached = Vec::new();
            self.collect_descendants(*child, &mut reached)?;
            if let Some(shared) = reached.iter().find(|a| seen.contains(*a)) {
                return Err(ReelError::validation(format!(
                    "sync would drive animation {} more than once per frame",
                    shared.id
                )));
            }
            seen.extend(reached);
        }
        self.push_animation(
            None,
            0.0,
            AnimationKind::Sync {
                children: children.to_vec(),
            },
        )
    }

    /// Move the target of `inner` to `to` over `duration` seconds while driving `inner`.
    ///
    /// The start position is the target's position right now.
    pub fn move_to(&mut self, inner: AnimRef, to: Point, duration: f64) -> ReelResult<AnimRef> {
        let wrapped = self.animation(inner).ok_or_else(|| {
            ReelError::validation(format!("move target animation {} is not on this stage", inner.id))
        })?;
        let target = wrapped.target().ok_or_else(|| {
            ReelError::validation(format!(
                "move cannot wrap animation {} because it has no target object",
                inner.id
            ))
        })?;
        let from = self.try_object(target)?.position;
        self.push_animation(
            Some(target),
            duration,
            AnimationKind::Move(MoveSpec {
                inner,
                from,
                to,
                ease: Ease::Linear,
            }),
        )
    }

    /// Advance `anim` by `dt` seconds outside of any scene.
    ///
    /// Returns `true` once the animation has completed; completed animations are left
    /// untouched and keep returning `true`. `dt` must be finite and `>= 0`.
    pub fn advance(&mut self, anim: AnimRef, dt: f64) -> ReelResult<bool> {
        state::check_delta(dt)?;
        state::advance(self, anim, dt)
    }

    /// Return `anim` and everything nested in it to the not-started state.
    pub fn reset(&mut self, anim: AnimRef) -> ReelResult<()> {
        state::reset(self, anim)
    }

    /// Activate `anim` against `registry`, as a scene does when the animation starts.
    pub fn activate(&mut self, anim: AnimRef, registry: &mut ObjectRegistry) -> ReelResult<()> {
        state::activate(self, anim, registry)
    }

    /// Nominal running time of `anim`: own duration, longest child for sync groups,
    /// and the longer of motion and wrapped animation for moves.
    pub fn total_duration(&self, anim: AnimRef) -> ReelResult<f64> {
        let a = self.try_animation(anim)?;
        match &a.kind {
            AnimationKind::Simple { .. } => Ok(a.duration().max(0.0)),
            AnimationKind::Sync { children } => children
                .iter()
                .try_fold(0.0_f64, |acc, c| Ok(acc.max(self.total_duration(*c)?))),
            AnimationKind::Move(spec) => Ok(a.duration().max(self.total_duration(spec.inner)?)),
        }
    }

    /// Every object an animation touches, in activation order.
    pub fn targets(&self, anim: AnimRef) -> ReelResult<Vec<ObjectRef>> {
        let mut out = Vec::new();
        self.collect_targets(anim, &mut out)?;
        Ok(out)
    }

    /// `anim` followed by every animation nested inside it.
    fn collect_descendants(&self, anim: AnimRef, out: &mut Vec<AnimRef>) -> ReelResult<()> {
        out.push(anim);
        match &self.try_animation(anim)?.kind {
            AnimationKind::Simple { .. } => {}
            AnimationKind::Sync { children } => {
                for c in children {
                    self.collect_descendants(*c, out)?;
                }
            }
            AnimationKind::Move(spec) => self.collect_descendants(spec.inner, out)?,
        }
        Ok(())
    }

    fn collect_targets(&self, anim: AnimRef, out: &mut Vec<ObjectRef>) -> ReelResult<()> {
        let a = self.try_animation(anim)?;
        match &a.kind {
            AnimationKind::Simple { .. } => out.extend(a.target()),
            AnimationKind::Sync { children } => {
                for c in children {
                    self.collect_targets(*c, out)?;
                }
            }
            AnimationKind::Move(spec) => self.collect_targets(spec.inner, out)?,
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/arena.rs"]
mod tests;
