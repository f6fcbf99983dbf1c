use std::sync::Arc;

use crate::{
    animation::ease::Ease,
    foundation::core::Point,
    foundation::error::{ReelError, ReelResult},
    foundation::ids::AnimationId,
    object::model::{Object, Render},
    stage::arena::{AnimRef, ObjectRef},
};

/// Progress handed to an interpolator on every advance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    /// Eased progress in `[0, 1]`.
    pub t: f64,
    /// Seconds since activation.
    pub elapsed: f64,
    /// Animation duration in seconds.
    pub duration: f64,
}

/// Caller-supplied interpolator for [`Interp::Custom`].
pub type InterpFn = Arc<dyn Fn(&mut Object, &Progress) + Send + Sync>;

/// What a simple animation does to its target each advance.
#[derive(Clone)]
pub enum Interp {
    /// The target kind's default reveal (sweep, trace, type-on, fade-in).
    Reveal,
    /// Nothing; the animation only occupies time.
    Hold,
    /// Swap the target's render capability to [`Render::Hidden`].
    Disappear,
    /// Caller-provided interpolator.
    Custom(InterpFn),
}

impl Interp {
    /// Wrap a closure as an interpolator.
    pub fn custom(f: impl Fn(&mut Object, &Progress) + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Apply the interpolator to `object` at progress `p`.
    pub fn apply(&self, object: &mut Object, p: &Progress) {
        match self {
            Self::Reveal => object.reveal(p),
            Self::Hold => {}
            Self::Disappear => object.render = Render::Hidden,
            Self::Custom(f) => f(object, p),
        }
    }
}

impl std::fmt::Debug for Interp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reveal => f.write_str("Reveal"),
            Self::Hold => f.write_str("Hold"),
            Self::Disappear => f.write_str("Disappear"),
            Self::Custom(func) => f
                .debug_tuple("Custom")
                .field(&Arc::as_ptr(func).cast::<()>())
                .finish(),
        }
    }
}

/// Linear motion wrapped around another animation.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveSpec {
    /// Wrapped animation, driven concurrently with the motion.
    pub inner: AnimRef,
    /// Target position captured when the move was built.
    pub from: Point,
    /// Destination.
    pub to: Point,
    /// Easing applied to the motion.
    pub ease: Ease,
}

/// Animation variants.
#[derive(Clone, Debug)]
pub enum AnimationKind {
    /// Timer-driven interpolation of one target.
    Simple {
        /// Per-advance effect.
        interp: Interp,
        /// Easing applied before interpolation.
        ease: Ease,
    },
    /// Parallel group: completes once every child has completed.
    Sync {
        /// Children, in activation order.
        children: Vec<AnimRef>,
    },
    /// Decorator that moves the wrapped animation's target while driving it.
    Move(MoveSpec),
}

impl AnimationKind {
    /// Short variant name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Simple { .. } => "simple",
            Self::Sync { .. } => "sync",
            Self::Move(_) => "move",
        }
    }
}

/// A timed state machine bound to at most one target object.
///
/// Lifecycle: pending (queued) -> active (advancing) -> completed. Once completed,
/// advancing is a no-op that reports completion; only activation resets the timer.
#[derive(Clone, Debug)]
pub struct Animation {
    id: AnimationId,
    target: Option<ObjectRef>,
    duration: f64,
    pub(crate) elapsed: f64,
    pub(crate) done: bool,
    resettable: bool,
    pub(crate) activations: u32,
    pub(crate) snapshot: Vec<(ObjectRef, Object)>,
    pub(crate) kind: AnimationKind,
}

pub(crate) fn check_duration(duration: f64) -> ReelResult<f64> {
    if !duration.is_finite() {
        return Err(ReelError::validation(format!(
            "animation duration must be finite, got {duration}"
        )));
    }
    Ok(duration)
}

impl Animation {
    pub(crate) fn new(
        id: AnimationId,
        target: Option<ObjectRef>,
        duration: f64,
        kind: AnimationKind,
    ) -> ReelResult<Self> {
        Ok(Self {
            id,
            target,
            duration: check_duration(duration)?,
            elapsed: 0.0,
            done: false,
            resettable: false,
            activations: 0,
            snapshot: Vec::new(),
            kind,
        })
    }

    /// Animation identity.
    pub fn id(&self) -> AnimationId {
        self.id
    }

    /// Target object; `None` for sync groups.
    pub fn target(&self) -> Option<ObjectRef> {
        self.target
    }

    /// Own duration in seconds. Zero or negative means "complete on first advance".
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Seconds advanced since the last activation.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Whether the animation has completed since its last activation.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Whether re-activation restores the target state captured at first activation.
    pub fn is_resettable(&self) -> bool {
        self.resettable
    }

    /// How many times the scene has activated this animation.
    pub fn activations(&self) -> u32 {
        self.activations
    }

    /// Variant and variant data.
    pub fn kind(&self) -> &AnimationKind {
        &self.kind
    }

    /// Change the duration. Sync groups have no duration of their own.
    pub fn set_duration(&mut self, duration: f64) -> ReelResult<()> {
        if matches!(self.kind, AnimationKind::Sync { .. }) {
            return Err(ReelError::validation(
                "sync groups take their duration from their children",
            ));
        }
        self.duration = check_duration(duration)?;
        Ok(())
    }

    /// Easing curve, or `None` for sync groups.
    pub fn ease(&self) -> Option<Ease> {
        match &self.kind {
            AnimationKind::Simple { ease, .. } => Some(*ease),
            AnimationKind::Move(spec) => Some(spec.ease),
            AnimationKind::Sync { .. } => None,
        }
    }

    /// Change the easing curve of a simple animation or move.
    pub fn set_ease(&mut self, new_ease: Ease) -> ReelResult<()> {
        match &mut self.kind {
            AnimationKind::Simple { ease, .. } => *ease = new_ease,
            AnimationKind::Move(spec) => spec.ease = new_ease,
            AnimationKind::Sync { .. } => {
                return Err(ReelError::validation("sync groups have no easing"));
            }
        }
        Ok(())
    }

    /// Opt in or out of restoring target state on re-activation.
    pub fn set_resettable(&mut self, resettable: bool) {
        self.resettable = resettable;
        if !resettable {
            self.snapshot.clear();
        }
    }

    /// Raw progress `min(elapsed / duration, 1)`; a non-positive duration reads as 1.
    pub fn raw_progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }
}
