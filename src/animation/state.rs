//! Per-frame animation state machine: activation, reset, and advance.
//!
//! These functions work on handles against a [`Stage`] so composites can drive
//! children that live in the same arena.

use crate::{
    animation::composite,
    animation::ease::Ease,
    animation::model::{AnimationKind, Interp, Progress},
    foundation::error::{ReelError, ReelResult},
    scene::registry::ObjectRegistry,
    stage::arena::{AnimRef, Stage},
};

/// Reject frame deltas that are negative or not finite.
pub(crate) fn check_delta(dt: f64) -> ReelResult<()> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(ReelError::playback(format!(
            "frame delta must be finite and >= 0, got {dt}"
        )));
    }
    Ok(())
}

/// Advance `anim` by `dt` seconds. Returns `true` once the animation has completed.
///
/// Completed animations are left untouched and keep reporting `true`.
pub(crate) fn advance(stage: &mut Stage, anim: AnimRef, dt: f64) -> ReelResult<bool> {
    let a = stage.try_animation(anim)?;
    if a.done {
        return Ok(true);
    }
    match &a.kind {
        AnimationKind::Simple { interp, ease } => {
            let (interp, ease) = (interp.clone(), *ease);
            advance_simple(stage, anim, &interp, ease, dt)
        }
        AnimationKind::Sync { children } => {
            let children = children.clone();
            composite::advance_sync(stage, anim, &children, dt)
        }
        AnimationKind::Move(spec) => {
            let spec = spec.clone();
            composite::advance_move(stage, anim, &spec, dt)
        }
    }
}

fn advance_simple(
    stage: &mut Stage,
    anim: AnimRef,
    interp: &Interp,
    ease: Ease,
    dt: f64,
) -> ReelResult<bool> {
    let a = stage.try_animation_mut(anim)?;
    a.elapsed += dt;
    let progress = Progress {
        t: ease.apply(a.raw_progress()),
        elapsed: a.elapsed,
        duration: a.duration(),
    };
    let completed = a.elapsed >= a.duration();
    if completed {
        a.done = true;
    }
    let target = a.target();

    if let Some(target) = target {
        interp.apply(stage.try_object_mut(target)?, &progress);
    }
    Ok(completed)
}

/// Return `anim` (and, for composites, every descendant) to its pre-start state.
pub(crate) fn reset(stage: &mut Stage, anim: AnimRef) -> ReelResult<()> {
    let a = stage.try_animation_mut(anim)?;
    a.elapsed = 0.0;
    a.done = false;
    match &a.kind {
        AnimationKind::Simple { .. } => Ok(()),
        AnimationKind::Sync { children } => {
            for child in children.clone() {
                reset(stage, child)?;
            }
            Ok(())
        }
        AnimationKind::Move(spec) => {
            let inner = spec.inner;
            reset(stage, inner)
        }
    }
}

/// Activate `anim`: restore or capture resettable state, then register its targets.
///
/// Targets already present in the registry keep their first draw position.
pub(crate) fn activate(
    stage: &mut Stage,
    anim: AnimRef,
    registry: &mut ObjectRegistry,
) -> ReelResult<()> {
    restore_or_capture(stage, anim)?;
    stage.try_animation_mut(anim)?.activations += 1;

    let a = stage.try_animation(anim)?;
    match &a.kind {
        AnimationKind::Simple { .. } => {
            if let Some(target) = a.target() {
                if !registry.contains(target.id()) {
                    tracing::debug!(object = %target.id(), animation = %anim.id(), "registering object");
                    registry.push(target);
                }
            }
            Ok(())
        }
        AnimationKind::Sync { children } => {
            for child in children.clone() {
                activate(stage, child, registry)?;
            }
            Ok(())
        }
        AnimationKind::Move(spec) => {
            let inner = spec.inner;
            activate(stage, inner, registry)
        }
    }
}

fn restore_or_capture(stage: &mut Stage, anim: AnimRef) -> ReelResult<()> {
    let a = stage.try_animation(anim)?;
    if !a.is_resettable() {
        return Ok(());
    }
    if a.activations == 0 || a.snapshot.is_empty() {
        let mut snapshot = Vec::new();
        for target in stage.targets(anim)? {
            snapshot.push((target, stage.try_object(target)?.clone()));
        }
        stage.try_animation_mut(anim)?.snapshot = snapshot;
        return Ok(());
    }

    let snapshot = a.snapshot.clone();
    tracing::debug!(animation = %anim.id(), objects = snapshot.len(), "restoring target state");
    for (target, saved) in snapshot {
        *stage.try_object_mut(target)? = saved;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
