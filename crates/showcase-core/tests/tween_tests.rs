// Host-side tests for the camera tween engine.

use glam::Vec3;
use showcase_core::{CameraPose, TweenEngine, TweenStep};

fn poses() -> (CameraPose, CameraPose) {
    (
        CameraPose::new(Vec3::new(0.0, 1.0, 3.0), Vec3::ZERO),
        CameraPose::new(Vec3::new(4.0, 2.0, -1.0), Vec3::new(1.0, 1.0, 1.0)),
    )
}

fn between(a: f32, b: f32, v: f32) -> bool {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    v > lo && v < hi
}

#[test]
fn reaches_destination_at_duration() {
    let (from, to) = poses();
    let mut e: TweenEngine<()> = TweenEngine::new();
    e.start(from, to, 980.0, 1000.0, None);
    match e.advance(1980.0) {
        TweenStep::Finished(pose, _) => {
            assert!((pose.position - to.position).length() < 1e-5);
            assert!((pose.target - to.target).length() < 1e-5);
        }
        other => panic!("expected finish, got {:?}", other),
    }
    assert!(!e.is_active());
}

#[test]
fn halfway_is_strictly_between() {
    let (from, to) = poses();
    let mut e: TweenEngine<()> = TweenEngine::new();
    e.start(from, to, 800.0, 0.0, None);
    let TweenStep::Frame(mid) = e.advance(400.0) else {
        panic!("expected a frame");
    };
    assert!(between(from.position.x, to.position.x, mid.position.x));
    assert!(between(from.position.z, to.position.z, mid.position.z));
    assert!(between(from.target.y, to.target.y, mid.target.y));
}

#[test]
fn progress_is_monotonic() {
    let (from, to) = poses();
    let mut e: TweenEngine<()> = TweenEngine::new();
    e.start(from, to, 500.0, 0.0, None);
    let mut last = from.position.x;
    for ms in (10..500).step_by(10) {
        if let TweenStep::Frame(p) = e.advance(ms as f64) {
            assert!(p.position.x >= last);
            last = p.position.x;
        }
    }
}

#[test]
fn new_start_supersedes_in_flight_tween() {
    let (from, to) = poses();
    let mut e: TweenEngine<&str> = TweenEngine::new();
    let first = e.start(from, to, 500.0, 0.0, Some("first"));
    let TweenStep::Frame(mid) = e.advance(250.0) else {
        panic!("expected a frame");
    };
    let second = e.start(mid, from, 500.0, 250.0, Some("second"));
    assert!(!e.is_current(first));
    assert!(e.is_current(second));
    match e.advance(1000.0) {
        TweenStep::Finished(pose, done) => {
            assert_eq!(done, Some("second"));
            assert!((pose.position - from.position).length() < 1e-5);
        }
        other => panic!("expected finish, got {:?}", other),
    }
}

#[test]
fn cancel_leaves_last_frame_and_skips_completion() {
    let (from, to) = poses();
    let mut e: TweenEngine<u32> = TweenEngine::new();
    e.start(from, to, 500.0, 0.0, Some(1));
    assert!(matches!(e.advance(100.0), TweenStep::Frame(_)));
    e.cancel();
    assert_eq!(e.advance(600.0), TweenStep::Idle);
}
