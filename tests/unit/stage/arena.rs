use super::*;
use crate::animation::model::AnimationKind;

#[test]
fn handles_resolve_only_on_their_own_stage() {
    let mut a = Stage::new();
    let mut b = Stage::new();
    let on_a = a.circle(Point::ZERO, 1.0).unwrap();
    let _ = b.square(Point::ZERO, 1.0).unwrap();
    let _ = b.square(Point::ZERO, 1.0).unwrap();
    let on_b = b.circle(Point::ZERO, 1.0).unwrap();

    assert!(a.object(on_a).is_some());
    assert!(a.object(on_b).is_none());
    assert!(a.try_object(on_b).is_err());
}

#[test]
fn same_index_and_id_on_another_stage_does_not_resolve() {
    let mut a = Stage::new();
    let mut b = Stage::new();
    let on_a = a.circle(Point::ZERO, 1.0).unwrap();
    let on_b = b.circle(Point::ZERO, 1.0).unwrap();
    assert_eq!(on_a.id(), on_b.id());
    assert_ne!(on_a, on_b);

    assert!(a.object(on_b).is_none());
    let err = a.try_object(on_b).unwrap_err();
    assert!(err.to_string().contains("another stage"), "{err}");

    let anim_b = b.animate(on_b).unwrap();
    let _ = a.animate(on_a).unwrap();
    assert!(a.animation(anim_b).is_none());
    assert!(a.animate(on_b).is_err());
    assert!(a.move_to(anim_b, Point::ZERO, 1.0).is_err());
}

#[test]
fn ids_increase_in_creation_order() {
    let mut stage = Stage::new();
    let first = stage.circle(Point::ZERO, 1.0).unwrap();
    let second = stage.text(Point::ZERO, "hi").unwrap();
    assert!(first.id().as_u32() < second.id().as_u32());
    assert_eq!(stage.object_count(), 2);
}

#[test]
fn default_durations_follow_object_kind() {
    let mut stage = Stage::new();
    let circle = stage.circle(Point::ZERO, 1.0).unwrap();
    let text = stage.text(Point::ZERO, "abcd").unwrap();
    let image = stage.image(Point::ZERO, TextureHandle(0)).unwrap();

    let c = stage.animate(circle).unwrap();
    let t = stage.animate(text).unwrap();
    let i = stage.animate(image).unwrap();

    assert_eq!(stage.animation(c).unwrap().duration(), DEFAULT_SHAPE_DURATION);
    assert_eq!(stage.animation(t).unwrap().duration(), 4.0 * Text::DEFAULT_REVEAL_INTERVAL);
    assert_eq!(stage.animation(i).unwrap().duration(), DEFAULT_IMAGE_DURATION);
}

#[test]
fn waits_share_one_placeholder() {
    let mut stage = Stage::new();
    let w1 = stage.wait(1.0).unwrap();
    let w2 = stage.wait(2.0).unwrap();
    let t1 = stage.animation(w1).unwrap().target();
    assert_eq!(t1, stage.animation(w2).unwrap().target());
    assert_eq!(stage.object_count(), 1);
    assert!(matches!(
        stage.object(t1.unwrap()).unwrap().kind,
        ObjectKind::Empty
    ));
}

#[test]
fn non_finite_durations_are_rejected() {
    let mut stage = Stage::new();
    let circle = stage.circle(Point::ZERO, 1.0).unwrap();
    assert!(stage.animate_for(circle, f64::NAN).is_err());
    assert!(stage.wait(f64::INFINITY).is_err());
    assert_eq!(stage.animation_count(), 0);
}

#[test]
fn sync_rejects_bad_children() {
    let mut stage = Stage::new();
    let circle = stage.circle(Point::ZERO, 1.0).unwrap();
    let anim = stage.animate(circle).unwrap();
    let mut other = Stage::new();
    let _ = other.wait(1.0).unwrap();
    let stranger = other.wait(1.0).unwrap();

    assert!(stage.sync(&[]).is_err());
    assert!(stage.sync(&[anim, anim]).is_err());
    assert!(stage.sync(&[anim, stranger]).is_err());
    assert!(stage.sync(&[anim]).is_ok());
}

#[test]
fn sync_rejects_animations_reached_twice() {
    let mut stage = Stage::new();
    let dot = stage.circle(Point::ZERO, 1.0).unwrap();
    let reveal = stage.animate(dot).unwrap();
    let slide = stage.move_to(reveal, Point::new(5.0, 5.0), 1.0).unwrap();
    let inner = stage.sync(&[reveal]).unwrap();
    let slide_again = stage.move_to(reveal, Point::new(9.0, 9.0), 1.0).unwrap();
    let before = stage.animation_count();

    assert!(stage.sync(&[reveal, slide]).is_err());
    assert!(stage.sync(&[slide, reveal]).is_err());
    assert!(stage.sync(&[reveal, inner]).is_err());
    assert!(stage.sync(&[slide, slide_again]).is_err());
    assert_eq!(stage.animation_count(), before);

    let wait = stage.wait(1.0).unwrap();
    let nested = stage.sync(&[inner, wait]).unwrap();
    assert!(stage.sync(&[nested, slide]).is_err());
}

#[test]
fn public_advance_reports_completion_and_checks_delta() {
    let mut stage = Stage::new();
    let dot = stage.circle(Point::ZERO, 1.0).unwrap();
    let reveal = stage.animate_for(dot, 0.5).unwrap();

    assert!(stage.advance(reveal, f64::NAN).is_err());
    assert!(stage.advance(reveal, -1.0).is_err());
    assert!(!stage.advance(reveal, 0.25).unwrap());
    assert!(stage.advance(reveal, 0.25).unwrap());
    assert!(stage.advance(reveal, 0.25).unwrap());
    assert_eq!(stage.animation(reveal).unwrap().elapsed(), 0.5);

    stage.reset(reveal).unwrap();
    assert!(!stage.animation(reveal).unwrap().is_done());
    assert_eq!(stage.animation(reveal).unwrap().elapsed(), 0.0);

    let mut registry = ObjectRegistry::new();
    stage.activate(reveal, &mut registry).unwrap();
    stage.activate(reveal, &mut registry).unwrap();
    assert_eq!(registry.iter().collect::<Vec<_>>(), vec![dot]);
}

#[test]
fn sync_groups_have_no_duration_or_ease() {
    let mut stage = Stage::new();
    let w = stage.wait(1.0).unwrap();
    let group = stage.sync(&[w]).unwrap();
    let g = stage.animation_mut(group).unwrap();
    assert!(g.target().is_none());
    assert!(g.set_duration(3.0).is_err());
    assert!(g.set_ease(crate::Ease::OutQuad).is_err());
    assert_eq!(g.ease(), None);
    assert_eq!(g.kind().name(), "sync");
}

#[test]
fn move_captures_start_position_at_construction() {
    let mut stage = Stage::new();
    let dot = stage.circle(Point::new(3.0, 4.0), 1.0).unwrap();
    let reveal = stage.animate(dot).unwrap();
    let slide = stage.move_to(reveal, Point::new(9.0, 9.0), 1.0).unwrap();
    stage.object_mut(dot).unwrap().position = Point::new(50.0, 50.0);

    let AnimationKind::Move(spec) = stage.animation(slide).unwrap().kind() else {
        panic!("expected a move");
    };
    assert_eq!(spec.from, Point::new(3.0, 4.0));
    assert_eq!(spec.inner, reveal);
    assert_eq!(stage.animation(slide).unwrap().target(), Some(dot));
}

#[test]
fn move_needs_a_targeted_animation() {
    let mut stage = Stage::new();
    let w = stage.wait(1.0).unwrap();
    let group = stage.sync(&[w]).unwrap();
    assert!(stage.move_to(group, Point::ZERO, 1.0).is_err());
}

#[test]
fn total_duration_and_targets_walk_composites() {
    let mut stage = Stage::new();
    let a = stage.circle(Point::ZERO, 1.0).unwrap();
    let b = stage.square(Point::ZERO, 1.0).unwrap();
    let anim_a = stage.animate_for(a, 0.5).unwrap();
    let anim_b = stage.animate_for(b, 2.0).unwrap();
    let slide = stage.move_to(anim_a, Point::new(1.0, 1.0), 3.0).unwrap();
    let group = stage.sync(&[slide, anim_b]).unwrap();

    assert_eq!(stage.total_duration(group).unwrap(), 3.0);
    assert_eq!(stage.targets(group).unwrap(), vec![a, b]);
}
