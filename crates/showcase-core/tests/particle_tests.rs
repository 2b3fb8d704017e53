// Host-side tests for the particle field simulator.

use glam::Vec3;
use showcase_core::particles::{FieldBounds, FieldParams, ParticleField};
use showcase_core::PointerState;

const EPS: f32 = 1e-4;

fn assert_policy(field: &ParticleField) {
    let b = field.bounds();
    for (i, p) in field.positions().iter().enumerate() {
        assert!(p.x >= -b.x - EPS && p.x <= b.x + EPS, "x out of range at {}: {}", i, p.x);
        assert!(p.y <= b.y_max + EPS, "y above max at {}: {}", i, p.y);
        assert!(p.z <= b.z_max + EPS, "z above max at {}: {}", i, p.z);
    }
}

#[test]
fn positions_respect_boundary_policy_over_many_steps() {
    let mut field = ParticleField::with_seed(FieldParams::desk(), 7);
    let mut pointer = PointerState::default();
    let mut elapsed = 0.0;
    for frame in 0..2000 {
        // mix regular frames with occasional hitches
        let dt = if frame % 97 == 0 { 0.5 } else { 1.0 / 60.0 };
        elapsed += dt;
        field.step(dt, elapsed, &mut pointer);
        assert_policy(&field);
    }
}

#[test]
fn repulsion_keeps_policy_while_touching() {
    let mut field = ParticleField::with_seed(FieldParams::bike(), 11);
    let mut pointer = PointerState::default();
    pointer.capture(400.0, 300.0, 800.0, 600.0);
    pointer.touch();
    for frame in 0..600 {
        field.step(1.0 / 60.0, frame as f32 / 60.0, &mut pointer);
        assert_policy(&field);
    }
    assert!(pointer.strength > 2.0);
}

#[test]
fn repulsion_pushes_nearby_particles_back() {
    let mut params = FieldParams::desk();
    params.count = 400;
    params.vel_x = 0.0..0.0;
    params.vel_y = 0.0..0.0;
    params.vel_z = 0.0..0.0;
    let bounds = FieldBounds {
        x: 3.0,
        y_min: -1.0,
        y_max: 1.0,
        z_min: -5.0,
        z_max: -1.0,
    };
    let mut field = ParticleField::with_seed(params, 3);
    field.set_bounds(bounds);

    // left edge, vertical middle of the window
    let mut pointer = PointerState::default();
    pointer.capture(0.0, 300.0, 800.0, 600.0);
    pointer.mouse_enter();
    let hover = glam::Vec2::new(-bounds.x * 0.84, 0.0);
    let radius = 1.85; // model radius 1.0 before any model is measured

    let before: Vec<Vec3> = field.positions().to_vec();
    let near: Vec<usize> = before
        .iter()
        .enumerate()
        .filter(|(_, p)| (glam::Vec2::new(p.x, p.y) - hover).length() < radius * 0.5)
        .map(|(i, _)| i)
        .collect();
    assert!(!near.is_empty());

    for _ in 0..30 {
        field.step(1.0 / 60.0, 0.0, &mut pointer);
    }
    for i in near {
        assert!(field.positions()[i].z < before[i].z, "particle {} was not pushed", i);
    }
}

#[test]
fn reseed_places_particles_in_new_bounds_and_keeps_count() {
    let mut field = ParticleField::with_seed(FieldParams::desk(), 5);
    let count = field.len();
    field.sync_with_model(2.0);
    let b = field.bounds();
    assert_eq!(field.len(), count);
    assert!((b.x - 9.2).abs() < 1e-5);
    assert!((b.z_max - -3.6).abs() < 1e-5);
    for p in field.positions() {
        assert!(b.contains(*p), "{:?} outside {:?}", p, b);
    }
    assert!(field.take_dirty());
    assert!(!field.take_dirty());
}

#[test]
fn reseed_spreads_particles_across_bounds() {
    let field = ParticleField::with_seed(FieldParams::bike(), 9);
    let b = field.bounds();
    let mean = field.positions().iter().copied().sum::<Vec3>() / field.len() as f32;
    let mid = Vec3::new(0.0, (b.y_min + b.y_max) * 0.5, (b.z_min + b.z_max) * 0.5);
    assert!((mean - mid).abs().max_element() < 0.2, "mean {:?} vs mid {:?}", mean, mid);
}

#[test]
fn flat_buffer_matches_positions() {
    let field = ParticleField::with_seed(FieldParams::desk(), 1);
    let flat = field.positions_flat();
    assert_eq!(flat.len(), field.len() * 3);
    let p1 = field.positions()[1];
    assert_eq!(&flat[3..6], &[p1.x, p1.y, p1.z]);
}

#[test]
fn frame_hitch_is_clamped() {
    let mut params = FieldParams::desk();
    params.count = 1;
    params.vel_x = 0.0..0.0;
    params.vel_y = 0.005..0.005;
    params.vel_z = 0.0..0.0;
    let mut field = ParticleField::with_seed(params, 2);
    field.set_bounds(FieldBounds {
        x: 1.0,
        y_min: -100.0,
        y_max: 100.0,
        z_min: -1.0,
        z_max: 1.0,
    });
    let y0 = field.positions()[0].y;
    let mut pointer = PointerState::default();
    field.step(10.0, 0.0, &mut pointer);
    let dy = field.positions()[0].y - y0;
    assert!((dy - 0.005 * 1.8).abs() < 1e-5, "dy = {}", dy);
}
