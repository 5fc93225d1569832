//! Programmatic orbit camera and the viewport it projects into.

use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_Y_DEG, CAMERA_INCLINATION_DEG, CAMERA_LOOK_AT, CAMERA_NEAR,
    CAMERA_RADIUS, CAMERA_SPEED,
};
use glam::{Mat4, Vec3};

/// Fixed orbit: constant radius and inclination, angle advanced a fixed step
/// per frame.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub angle: f32,
    pub radius: f32,
    /// Polar angle from +Y, radians.
    pub inclination: f32,
    pub speed: f32,
    pub look_at: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            angle: 0.0,
            radius: CAMERA_RADIUS,
            inclination: CAMERA_INCLINATION_DEG.to_radians(),
            speed: CAMERA_SPEED,
            look_at: Vec3::from_array(CAMERA_LOOK_AT),
        }
    }
}

impl CameraRig {
    pub fn advance(&mut self) {
        self.angle += self.speed;
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_i, cos_i) = self.inclination.sin_cos();
        let (sin_a, cos_a) = self.angle.sin_cos();
        Vec3::new(
            self.radius * sin_i * sin_a,
            self.radius * cos_i,
            self.radius * sin_i * cos_a,
        )
    }
}

/// Drawing-buffer size and the aspect ratio derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub aspect: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        let mut v = Self {
            width: 0,
            height: 0,
            aspect: 1.0,
        };
        v.resize(width, height);
        v
    }

    /// Returns `true` when the size actually changed. Zero-sized requests
    /// (hidden or collapsed canvas) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        if width == self.width && height == self.height {
            return false;
        }
        self.width = width;
        self.height = height;
        self.aspect = width as f32 / height as f32;
        true
    }
}

#[derive(Clone, Debug)]
pub struct Projection {
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: CAMERA_FOV_Y_DEG.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

impl Projection {
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }
}

/// Resolved camera for one frame.
#[derive(Clone, Copy, Debug)]
pub struct CameraView {
    pub eye: Vec3,
    pub target: Vec3,
}

impl CameraView {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn view_proj(&self, projection: &Projection, viewport: &Viewport) -> Mat4 {
        projection.matrix(viewport.aspect) * self.view_matrix()
    }
}
