//! Decorative particle field: constant drift, per-index wave, pointer repulsion.
//!
//! Positions and velocities live in parallel `Vec<Vec3>` buffers. Velocities
//! are authored per 60 Hz frame and scaled by the clamped frame step so a
//! dropped frame does not teleport the cloud.

use crate::constants::{
    FRAME_RATE_REFERENCE, MAX_FRAME_STEP, REPEL_DIST_EPSILON, REPEL_MIN_STRENGTH, WAVE_AMPLITUDE,
};
use crate::pointer::PointerState;
use glam::Vec3;
use rand::prelude::*;
use std::ops::Range;

/// Axis-aligned region the particles live in. `x` is symmetric around zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldBounds {
    pub x: f32,
    pub y_min: f32,
    pub y_max: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl FieldBounds {
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= -self.x
            && p.x <= self.x
            && p.y >= self.y_min
            && p.y <= self.y_max
            && p.z >= self.z_min
            && p.z <= self.z_max
    }
}

/// Multipliers turning a model radius into [`FieldBounds`].
#[derive(Clone, Copy, Debug)]
pub struct BoundsScale {
    pub x: f32,
    pub y_min: f32,
    pub y_max: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl BoundsScale {
    pub fn bounds_for(&self, model_radius: f32) -> FieldBounds {
        FieldBounds {
            x: model_radius * self.x,
            y_min: model_radius * self.y_min,
            y_max: model_radius * self.y_max,
            z_min: model_radius * self.z_min,
            z_max: model_radius * self.z_max,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count: usize,
    /// Bounds used before a model has been measured.
    pub initial_bounds: FieldBounds,
    pub bounds_scale: BoundsScale,
    pub vel_x: Range<f32>,
    pub vel_y: Range<f32>,
    pub vel_z: Range<f32>,
    pub wave_freq: f32,
    pub wave_phase: f32,
    pub repel_radius_scale: f32,
    pub repel_gain: f32,
    pub repel_y: f32,
    pub repel_z: f32,
    pub hover_x_scale: f32,
    pub hover_strength: f32,
    pub touch_strength: f32,
    pub strength_smoothing: f32,
}

impl FieldParams {
    /// Sparse cyan rain behind the desk.
    pub fn desk() -> Self {
        Self {
            count: 1680,
            initial_bounds: FieldBounds {
                x: 3.2,
                y_min: -1.6,
                y_max: 2.8,
                z_min: -6.6,
                z_max: -2.1,
            },
            bounds_scale: BoundsScale {
                x: 4.6,
                y_min: -1.9,
                y_max: 2.6,
                z_min: -5.8,
                z_max: -1.8,
            },
            vel_x: -0.0054..0.0054,
            vel_y: 0.0034..0.0084,
            vel_z: 0.0022..0.0058,
            wave_freq: 0.6,
            wave_phase: 0.17,
            repel_radius_scale: 1.85,
            repel_gain: 0.23,
            repel_y: 0.9,
            repel_z: 0.95,
            hover_x_scale: 0.84,
            hover_strength: 2.1,
            touch_strength: 2.8,
            strength_smoothing: 0.18,
        }
    }

    /// Denser, shallower field wrapped around the bike.
    pub fn bike() -> Self {
        Self {
            count: 3600,
            initial_bounds: FieldBounds {
                x: 4.0,
                y_min: -2.0,
                y_max: 3.0,
                z_min: -3.6,
                z_max: -0.35,
            },
            bounds_scale: BoundsScale {
                x: 4.1,
                y_min: -1.6,
                y_max: 2.8,
                z_min: -3.2,
                z_max: -0.25,
            },
            vel_x: -0.0062..0.0062,
            vel_y: 0.0032..0.0088,
            vel_z: 0.003..0.0078,
            wave_freq: 0.7,
            wave_phase: 0.14,
            repel_radius_scale: 1.35,
            repel_gain: 0.17,
            repel_y: 0.88,
            repel_z: 0.84,
            hover_x_scale: 0.82,
            hover_strength: 1.7,
            touch_strength: 2.4,
            strength_smoothing: 0.14,
        }
    }
}

pub struct ParticleField {
    pub params: FieldParams,
    bounds: FieldBounds,
    model_radius: f32,
    positions: Vec<Vec3>,
    velocity: Vec<Vec3>,
    rng: StdRng,
    dirty: bool,
}

impl ParticleField {
    pub fn new(params: FieldParams, rng: StdRng) -> Self {
        let count = params.count;
        let bounds = params.initial_bounds;
        let mut field = Self {
            params,
            bounds,
            model_radius: 1.0,
            positions: vec![Vec3::ZERO; count],
            velocity: vec![Vec3::ZERO; count],
            rng,
            dirty: true,
        };
        field.reseed();
        field
    }

    pub fn with_seed(params: FieldParams, seed: u64) -> Self {
        Self::new(params, StdRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn bounds(&self) -> FieldBounds {
        self.bounds
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Positions as a tightly packed `[x, y, z, x, y, z, ...]` buffer.
    #[inline]
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(self.positions.as_slice())
    }

    /// Returns whether positions changed since the last call and clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Re-derive bounds from a freshly measured model and re-seed every particle.
    pub fn sync_with_model(&mut self, model_radius: f32) {
        self.model_radius = model_radius;
        let bounds = self.params.bounds_scale.bounds_for(model_radius);
        self.set_bounds(bounds);
    }

    pub fn set_bounds(&mut self, bounds: FieldBounds) {
        self.bounds = bounds;
        self.reseed();
    }

    pub fn reseed(&mut self) {
        for i in 0..self.positions.len() {
            self.seed_particle(i);
        }
        self.dirty = true;
    }

    fn seed_particle(&mut self, i: usize) {
        let b = self.bounds;
        self.positions[i] = Vec3::new(
            random_range(&mut self.rng, -b.x, b.x),
            random_range(&mut self.rng, b.y_min, b.y_max),
            random_range(&mut self.rng, b.z_min, b.z_max),
        );
        let p = &self.params;
        let (vx, vy, vz) = (p.vel_x.clone(), p.vel_y.clone(), p.vel_z.clone());
        self.velocity[i] = Vec3::new(
            random_range(&mut self.rng, vx.start, vx.end),
            random_range(&mut self.rng, vy.start, vy.end),
            random_range(&mut self.rng, vz.start, vz.end),
        );
    }

    /// Advance one animation frame.
    pub fn step(&mut self, delta_sec: f32, elapsed_sec: f32, pointer: &mut PointerState) {
        let p = &self.params;
        let b = self.bounds;
        let step = (delta_sec.max(0.0) * FRAME_RATE_REFERENCE).min(MAX_FRAME_STEP);
        let radius = self.model_radius * p.repel_radius_scale;
        let radius_sq = radius * radius;

        let cursor = pointer.clamped();
        let hover_x = cursor.x * b.x * p.hover_x_scale;
        let hover_y = lerp(b.y_min, b.y_max, (1.0 - cursor.y) * 0.5);
        let strength =
            pointer.smooth_strength(p.hover_strength, p.touch_strength, p.strength_smoothing);
        let repelling = strength > REPEL_MIN_STRENGTH;

        let (wave_freq, wave_phase) = (p.wave_freq, p.wave_phase);
        let (repel_gain, repel_y, repel_z) = (p.repel_gain, p.repel_y, p.repel_z);

        for i in 0..self.positions.len() {
            let wave = (elapsed_sec * wave_freq + i as f32 * wave_phase).sin() * WAVE_AMPLITUDE;
            let vel = self.velocity[i];
            let pos = &mut self.positions[i];
            pos.x += (vel.x + wave) * step;
            pos.y += vel.y * step;
            pos.z += vel.z * step;

            if repelling {
                let dx = pos.x - hover_x;
                let dy = pos.y - hover_y;
                let dist_sq = dx * dx + dy * dy;
                if dist_sq < radius_sq {
                    let dist = dist_sq.sqrt() + REPEL_DIST_EPSILON;
                    let falloff = (1.0 - dist / radius) * strength;
                    let repel = falloff * repel_gain * step;
                    pos.x += (dx / dist) * repel;
                    pos.y += (dy / dist) * repel * repel_y;
                    pos.z -= repel * repel_z;
                }
            }

            if pos.x > b.x {
                pos.x = -b.x;
            } else if pos.x < -b.x {
                pos.x = b.x;
            }

            if pos.y > b.y_max {
                pos.y = b.y_min;
            }

            if pos.z > b.z_max {
                pos.z = b.z_min;
                pos.x = random_range(&mut self.rng, -b.x, b.x);
                pos.y = random_range(&mut self.rng, b.y_min, b.y_max);
            }
        }

        self.dirty = true;
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
fn random_range(rng: &mut StdRng, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}
