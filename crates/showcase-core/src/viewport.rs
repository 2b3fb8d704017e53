//! Render-surface size and perspective projection.
//!
//! The scene host owns the real camera object; this mirror keeps the same
//! projection parameters so hotspot anchors can be projected to screen space
//! without a round trip through the host.

use crate::tween::CameraPose;
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(fovy_degrees: f32, znear: f32, zfar: f32, pose: CameraPose) -> Self {
        Self {
            eye: pose.position,
            target: pose.target,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: fovy_degrees.to_radians(),
            znear,
            zfar,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    #[inline]
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.eye = pose.position;
        self.target = pose.target;
    }

    #[inline]
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.eye, self.target)
    }

    /// Tighten clip planes around a measured model.
    pub fn fit_clip_planes(&mut self, model_radius: f32, near_divisor: f32, far_multiplier: f32) {
        self.znear = (model_radius / near_divisor).max(0.01);
        self.zfar = (model_radius * far_multiplier).max(1200.0);
    }

    /// Project a world point to normalized device coordinates (GL convention,
    /// z in \[-1, 1\] for points between the clip planes).
    pub fn project(&self, world: Vec3) -> Vec3 {
        (self.projection_matrix() * self.view_matrix()).project_point3(world)
    }
}

/// CSS-pixel size of the canvas the host renders into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

impl Viewport {
    /// Apply a new canvas size. Zero-sized layouts (hidden canvas) are ignored.
    pub fn resize(&mut self, width: f32, height: f32, camera: &mut Camera) -> bool {
        if width <= 0.0 || height <= 0.0 {
            return false;
        }
        self.width = width;
        self.height = height;
        camera.aspect = width / height;
        true
    }

    /// Screen position (CSS px, origin top-left) of a world point, or None when
    /// it falls outside the depth range.
    pub fn screen_position(&self, camera: &Camera, world: Vec3) -> Option<Vec2> {
        let ndc = camera.project(world);
        if !(ndc.z > -1.0 && ndc.z < 1.0) {
            return None;
        }
        Some(Vec2::new(
            (ndc.x * 0.5 + 0.5) * self.width,
            (-ndc.y * 0.5 + 0.5) * self.height,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cam() -> Camera {
        Camera::new(
            38.0,
            0.01,
            100.0,
            CameraPose::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO),
        )
    }

    #[test]
    fn resize_ignores_empty_layout() {
        let mut c = cam();
        let mut v = Viewport::default();
        assert!(!v.resize(0.0, 300.0, &mut c));
        assert!(v.resize(800.0, 400.0, &mut c));
        assert_eq!(c.aspect, 2.0);
    }

    #[test]
    fn target_projects_to_screen_center() {
        let mut c = cam();
        let mut v = Viewport::default();
        v.resize(800.0, 600.0, &mut c);
        let p = v.screen_position(&c, Vec3::ZERO).unwrap();
        assert!((p.x - 400.0).abs() < 1e-3);
        assert!((p.y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn point_behind_camera_is_hidden() {
        let mut c = cam();
        let mut v = Viewport::default();
        v.resize(800.0, 600.0, &mut c);
        assert!(v.screen_position(&c, Vec3::new(0.0, 0.0, 10.0)).is_none());
    }
}
