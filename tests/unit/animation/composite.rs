use super::*;
use crate::animation::ease::Ease;

#[test]
fn sync_completes_when_its_longest_child_does() {
    let mut stage = Stage::new();
    let a = stage.circle(Point::ZERO, 1.0).unwrap();
    let b = stage.square(Point::ZERO, 1.0).unwrap();
    let short = stage.animate_for(a, 1.0).unwrap();
    let long = stage.animate_for(b, 2.0).unwrap();
    let group = stage.sync(&[short, long]).unwrap();

    let mut results = Vec::new();
    for _ in 0..4 {
        results.push(advance(&mut stage, group, 0.5).unwrap());
    }
    assert_eq!(results, vec![false, false, false, true]);
    assert!(stage.animation(short).unwrap().is_done());
    assert_eq!(stage.total_duration(group).unwrap(), 2.0);
}

#[test]
fn finished_sync_children_stop_advancing() {
    let mut stage = Stage::new();
    let a = stage.circle(Point::ZERO, 1.0).unwrap();
    let b = stage.circle(Point::ZERO, 1.0).unwrap();
    let short = stage.animate_for(a, 0.5).unwrap();
    let long = stage.animate_for(b, 1.0).unwrap();
    let group = stage.sync(&[short, long]).unwrap();

    advance(&mut stage, group, 0.5).unwrap();
    advance(&mut stage, group, 0.5).unwrap();
    assert_eq!(stage.animation(short).unwrap().elapsed(), 0.5);
    assert_eq!(stage.animation(long).unwrap().elapsed(), 1.0);
}

#[test]
fn move_interpolates_position_along_its_own_timer() {
    let mut stage = Stage::new();
    let dot = stage.circle(Point::new(0.0, 0.0), 5.0).unwrap();
    let reveal = stage.animate_for(dot, 1.0).unwrap();
    let slide = stage.move_to(reveal, Point::new(100.0, 40.0), 1.0).unwrap();

    assert!(!advance(&mut stage, slide, 0.25).unwrap());
    assert_eq!(stage.object(dot).unwrap().position, Point::new(25.0, 10.0));
    assert_eq!(
        stage.object(dot).unwrap().as_circle().unwrap().sweep_deg(),
        90.0
    );
}

#[test]
fn move_lands_on_destination_even_when_inner_runs_longer() {
    let mut stage = Stage::new();
    let dot = stage.circle(Point::new(10.0, 10.0), 5.0).unwrap();
    let reveal = stage.animate_for(dot, 1.5).unwrap();
    let slide = stage.move_to(reveal, Point::new(70.0, 30.0), 0.5).unwrap();
    stage
        .animation_mut(slide)
        .unwrap()
        .set_ease(Ease::InOutCubic)
        .unwrap();

    let mut steps = 0;
    while !advance(&mut stage, slide, 0.25).unwrap() {
        steps += 1;
        assert!(steps < 100);
    }
    assert_eq!(steps, 5);
    assert_eq!(stage.object(dot).unwrap().position, Point::new(70.0, 30.0));
    assert_eq!(stage.total_duration(slide).unwrap(), 1.5);
}

#[test]
fn move_waits_for_its_own_timer_when_inner_is_shorter() {
    let mut stage = Stage::new();
    let dot = stage.circle(Point::ZERO, 5.0).unwrap();
    let reveal = stage.animate_for(dot, 0.25).unwrap();
    let slide = stage.move_to(reveal, Point::new(8.0, 0.0), 1.0).unwrap();

    assert!(!advance(&mut stage, slide, 0.5).unwrap());
    assert!(stage.animation(reveal).unwrap().is_done());
    assert!(advance(&mut stage, slide, 0.5).unwrap());
    assert_eq!(stage.object(dot).unwrap().position, Point::new(8.0, 0.0));
}
