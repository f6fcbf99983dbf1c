use crate::{
    animation::model::MoveSpec,
    animation::state::advance,
    foundation::core::{Lerp, Point},
    foundation::error::ReelResult,
    stage::arena::{AnimRef, Stage},
};

/// Drive every unfinished child with the same `dt`; complete once all children have.
pub(crate) fn advance_sync(
    stage: &mut Stage,
    anim: AnimRef,
    children: &[AnimRef],
    dt: f64,
) -> ReelResult<bool> {
    stage.try_animation_mut(anim)?.elapsed += dt;

    let mut all_done = true;
    for &child in children {
        if stage.try_animation(child)?.done {
            continue;
        }
        if advance(stage, child, dt)? {
            tracing::trace!(sync = %anim.id(), child = %child.id(), "sync child completed");
        } else {
            all_done = false;
        }
    }

    if all_done {
        stage.try_animation_mut(anim)?.done = true;
    }
    Ok(all_done)
}

/// Move the wrapped target along `from -> to` on the move's own timer while driving
/// the wrapped animation; complete once both have.
pub(crate) fn advance_move(
    stage: &mut Stage,
    anim: AnimRef,
    spec: &MoveSpec,
    dt: f64,
) -> ReelResult<bool> {
    let a = stage.try_animation_mut(anim)?;
    a.elapsed += dt;
    let t = spec.ease.apply(a.raw_progress());
    let own_done = a.elapsed >= a.duration();
    let target = a.target();

    if let Some(target) = target {
        stage.try_object_mut(target)?.position = <Point as Lerp>::lerp(&spec.from, &spec.to, t);
    }
    let inner_done = advance(stage, spec.inner, dt)?;

    let completed = own_done && inner_done;
    if completed {
        stage.try_animation_mut(anim)?.done = true;
    }
    Ok(completed)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/composite.rs"]
mod tests;
