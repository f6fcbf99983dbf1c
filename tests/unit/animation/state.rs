use super::*;
use crate::{foundation::core::Point, object::model::Render};

fn circle_stage(duration: f64) -> (Stage, crate::stage::arena::ObjectRef, AnimRef) {
    let mut stage = Stage::new();
    let circle = stage.circle(Point::new(0.0, 0.0), 10.0).unwrap();
    let anim = stage.animate_for(circle, duration).unwrap();
    (stage, circle, anim)
}

fn sweep(stage: &Stage, circle: crate::stage::arena::ObjectRef) -> f64 {
    stage.object(circle).unwrap().as_circle().unwrap().sweep_deg()
}

#[test]
fn quarter_steps_complete_on_the_fourth_advance() {
    let (mut stage, circle, anim) = circle_stage(1.0);
    let mut seen = Vec::new();
    for _ in 0..4 {
        let done = advance(&mut stage, anim, 0.25).unwrap();
        seen.push((done, sweep(&stage, circle)));
    }
    assert_eq!(
        seen,
        vec![(false, 90.0), (false, 180.0), (false, 270.0), (true, 360.0)]
    );
    assert!(stage.animation(anim).unwrap().is_done());
}

#[test]
fn advancing_a_completed_animation_is_a_no_op() {
    let (mut stage, circle, anim) = circle_stage(0.5);
    assert!(advance(&mut stage, anim, 1.0).unwrap());
    let elapsed = stage.animation(anim).unwrap().elapsed();

    stage.object_mut(circle).unwrap().position = Point::new(7.0, 7.0);
    assert!(advance(&mut stage, anim, 1.0).unwrap());
    assert_eq!(stage.animation(anim).unwrap().elapsed(), elapsed);
    assert_eq!(stage.object(circle).unwrap().position, Point::new(7.0, 7.0));
}

#[test]
fn zero_and_negative_durations_complete_immediately() {
    for duration in [0.0, -1.0] {
        let (mut stage, circle, anim) = circle_stage(duration);
        assert!(advance(&mut stage, anim, 0.0).unwrap());
        assert_eq!(sweep(&stage, circle), 360.0);
    }
}

#[test]
fn disappear_hides_its_target_in_one_advance() {
    let mut stage = Stage::new();
    let rect = stage.square(Point::ZERO, 10.0).unwrap();
    let gone = stage.disappear(rect).unwrap();
    assert!(advance(&mut stage, gone, 0.016).unwrap());
    assert!(stage.object(rect).unwrap().render.is_hidden());
}

#[test]
fn easing_shapes_the_reported_progress() {
    let (mut stage, circle, anim) = circle_stage(1.0);
    stage
        .animation_mut(anim)
        .unwrap()
        .set_ease(Ease::InQuad)
        .unwrap();
    advance(&mut stage, anim, 0.5).unwrap();
    assert_eq!(sweep(&stage, circle), 90.0);
}

#[test]
fn custom_interpolators_see_progress() {
    let mut stage = Stage::new();
    let dot = stage.circle(Point::ZERO, 1.0).unwrap();
    let slide = stage
        .animate_with(
            dot,
            2.0,
            Interp::custom(|obj, p| obj.position = Point::new(p.t * 100.0, p.elapsed)),
        )
        .unwrap();
    advance(&mut stage, slide, 0.5).unwrap();
    assert_eq!(stage.object(dot).unwrap().position, Point::new(25.0, 0.5));
}

#[test]
fn activation_registers_each_target_once() {
    let (mut stage, circle, anim) = circle_stage(1.0);
    let mut registry = ObjectRegistry::new();
    activate(&mut stage, anim, &mut registry).unwrap();
    activate(&mut stage, anim, &mut registry).unwrap();
    assert_eq!(registry.iter().collect::<Vec<_>>(), vec![circle]);
    assert_eq!(stage.animation(anim).unwrap().activations(), 2);
}

#[test]
fn sync_activation_registers_children_in_order() {
    let mut stage = Stage::new();
    let a = stage.circle(Point::ZERO, 1.0).unwrap();
    let b = stage.square(Point::ZERO, 1.0).unwrap();
    let anim_a = stage.animate_for(a, 1.0).unwrap();
    let anim_b = stage.animate_for(b, 1.0).unwrap();
    let group = stage.sync(&[anim_b, anim_a]).unwrap();

    let mut registry = ObjectRegistry::new();
    activate(&mut stage, group, &mut registry).unwrap();
    assert_eq!(registry.iter().collect::<Vec<_>>(), vec![b, a]);
}

#[test]
fn reset_clears_composite_children() {
    let mut stage = Stage::new();
    let a = stage.circle(Point::ZERO, 1.0).unwrap();
    let anim_a = stage.animate_for(a, 0.5).unwrap();
    let group = stage.sync(&[anim_a]).unwrap();
    assert!(advance(&mut stage, group, 1.0).unwrap());

    reset(&mut stage, group).unwrap();
    let child = stage.animation(anim_a).unwrap();
    assert!(!child.is_done());
    assert_eq!(child.elapsed(), 0.0);
    assert!(!stage.animation(group).unwrap().is_done());
}

#[test]
fn resettable_animations_restore_target_state_on_reactivation() {
    let (mut stage, circle, anim) = circle_stage(1.0);
    stage.animation_mut(anim).unwrap().set_resettable(true);
    let mut registry = ObjectRegistry::new();

    activate(&mut stage, anim, &mut registry).unwrap();
    assert!(advance(&mut stage, anim, 1.0).unwrap());
    stage.object_mut(circle).unwrap().render = Render::Filled;
    assert_eq!(sweep(&stage, circle), 360.0);

    reset(&mut stage, anim).unwrap();
    activate(&mut stage, anim, &mut registry).unwrap();
    assert_eq!(sweep(&stage, circle), 0.0);
    assert!(matches!(
        stage.object(circle).unwrap().render,
        Render::Outline
    ));
}

#[test]
fn plain_animations_keep_target_state_on_reactivation() {
    let (mut stage, circle, anim) = circle_stage(1.0);
    let mut registry = ObjectRegistry::new();

    activate(&mut stage, anim, &mut registry).unwrap();
    assert!(advance(&mut stage, anim, 1.0).unwrap());
    reset(&mut stage, anim).unwrap();
    activate(&mut stage, anim, &mut registry).unwrap();
    assert_eq!(sweep(&stage, circle), 360.0);
}
