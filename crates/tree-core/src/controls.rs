//! Damped zoom/pan layered over the programmatic orbit.
//!
//! There is no rotate input: the orbit owns the camera angle. Input only
//! queues deltas, and `update` moves a fixed fraction of what is pending into
//! the applied state each frame.

use crate::camera::CameraView;
use crate::constants::{
    CONTROLS_DAMPING, CONTROLS_MAX_DISTANCE, CONTROLS_MIN_DISTANCE, CONTROLS_PAN_SPEED,
    CONTROLS_ZOOM_SPEED,
};
use glam::{Vec2, Vec3};

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub enable_damping: bool,
    pub damping_factor: f32,
    /// Applied zoom, log2 of the distance multiplier.
    zoom: f32,
    /// Applied pan in screen-aligned world units (right, up).
    pan: Vec2,
    pending_zoom: f32,
    pending_pan: Vec2,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: CONTROLS_DAMPING,
            zoom: 0.0,
            pan: Vec2::ZERO,
            pending_zoom: 0.0,
            pending_pan: Vec2::ZERO,
        }
    }
}

impl OrbitControls {
    /// Wheel input; positive deltas move the camera away.
    pub fn zoom(&mut self, wheel_delta: f32) {
        self.pending_zoom += wheel_delta * CONTROLS_ZOOM_SPEED;
    }

    /// Pointer drag in pixels; the scene follows the pointer.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.pending_pan += Vec2::new(-dx, dy) * CONTROLS_PAN_SPEED;
    }

    /// Advance damping by one frame. `orbit_distance` is the eye-target
    /// distance before zoom; the applied zoom is kept within the distance
    /// limits for it, and pending zoom past a limit is dropped.
    pub fn update(&mut self, orbit_distance: f32) {
        let f = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        let dz = self.pending_zoom * f;
        let dp = self.pending_pan * f;
        self.zoom += dz;
        self.pan += dp;
        self.pending_zoom -= dz;
        self.pending_pan -= dp;

        if orbit_distance > f32::EPSILON {
            let min = (CONTROLS_MIN_DISTANCE / orbit_distance).log2();
            let max = (CONTROLS_MAX_DISTANCE / orbit_distance).log2();
            if self.zoom >= max {
                self.zoom = max;
                self.pending_zoom = self.pending_zoom.min(0.0);
            } else if self.zoom <= min {
                self.zoom = min;
                self.pending_zoom = self.pending_zoom.max(0.0);
            }
        }
    }

    pub fn distance_scale(&self) -> f32 {
        self.zoom.exp2()
    }

    /// Apply the accumulated zoom and pan to an orbit-computed view.
    pub fn apply(&self, view: CameraView) -> CameraView {
        let offset = view.eye - view.target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return view;
        }
        let forward = -offset / distance;
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        let target = view.target + right * self.pan.x + up * self.pan.y;
        let scaled = if self.zoom == 0.0 {
            distance
        } else {
            (distance * self.distance_scale()).clamp(CONTROLS_MIN_DISTANCE, CONTROLS_MAX_DISTANCE)
        };
        let eye = target - forward * scaled;
        CameraView { eye, target }
    }
}
