use super::*;
use crate::{
    foundation::core::Point,
    playback::clock::FixedStepClock,
    render::backend::RecordingBackend,
    render::ops::DrawOp,
    scene::config::SceneConfig,
};

fn scene_with_reveal(duration: f64) -> (Scene, Stage) {
    let mut stage = Stage::new();
    let dot = stage.circle(Point::new(10.0, 10.0), 4.0).unwrap();
    let reveal = stage.animate_for(dot, duration).unwrap();
    let mut scene = Scene::new(SceneConfig::titled("player")).unwrap();
    scene.play(reveal);
    (scene, stage)
}

#[test]
fn runs_until_the_scene_finishes() {
    let (mut scene, mut stage) = scene_with_reveal(1.0);
    let mut clock = FixedStepClock::new(0.25);
    let mut backend = RecordingBackend::new();

    let stats = Player::default()
        .run(&mut scene, &mut stage, &mut clock, &mut backend)
        .unwrap();
    assert_eq!(
        stats,
        PlaybackStats {
            frames: 4,
            simulated_secs: 1.0,
            started: 1,
            completed: 1,
            finished: true,
        }
    );
    assert_eq!(backend.frame_count(), 4);
    let last = backend.last_frame().unwrap();
    assert!(matches!(last.ops[0], DrawOp::Ring { end_deg, .. } if end_deg == 360.0));
}

#[test]
fn clock_limit_stops_playback_early() {
    let (mut scene, mut stage) = scene_with_reveal(10.0);
    let mut clock = FixedStepClock::new(0.5).with_limit(1.0);
    let mut backend = RecordingBackend::new();

    let stats = Player::default()
        .run(&mut scene, &mut stage, &mut clock, &mut backend)
        .unwrap();
    assert_eq!(stats.frames, 2);
    assert!(!stats.finished);
    assert_eq!(stats.completed, 0);
}

#[test]
fn frame_cap_applies_even_when_running_past_the_end() {
    let (mut scene, mut stage) = scene_with_reveal(0.25);
    let mut clock = FixedStepClock::new(0.25);
    let mut backend = RecordingBackend::keep_all();
    let player = Player::new(PlayerOptions {
        stop_when_finished: false,
        max_frames: Some(6),
    });

    let stats = player
        .run(&mut scene, &mut stage, &mut clock, &mut backend)
        .unwrap();
    assert_eq!(stats.frames, 6);
    assert!(stats.finished);
    assert_eq!(backend.frames().len(), 6);
    assert_eq!(backend.frames()[1], backend.frames()[5]);
}

#[test]
fn empty_scene_renders_nothing() {
    let mut stage = Stage::new();
    let mut scene = Scene::new(SceneConfig::default()).unwrap();
    let mut clock = FixedStepClock::from_fps(60);
    let mut backend = RecordingBackend::new();

    let stats = Player::default()
        .run(&mut scene, &mut stage, &mut clock, &mut backend)
        .unwrap();
    assert_eq!(stats.frames, 0);
    assert!(stats.finished);
    assert!(backend.last_frame().is_none());
}

#[test]
fn options_default_to_stopping_when_finished() {
    let opts: PlayerOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, PlayerOptions::default());
    assert!(Player::default().options().stop_when_finished);
}
