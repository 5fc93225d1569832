use crate::constants::{
    AMBIENT_INTENSITY, FLICKER_HIGH, FLICKER_LOW, KEY_LIGHT_INTENSITY, KEY_LIGHT_POSITION,
    KEY_LIGHT_RANGE, LIGHT_DECAY,
};
use glam::Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    /// Distance at which the light's contribution reaches zero.
    pub range: f32,
    pub decay: f32,
}

/// Every light in the scene. This is the only place light intensity lives,
/// and the only state the secret-mode flicker writes.
#[derive(Clone, Debug)]
pub struct LightBank {
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub points: Vec<PointLight>,
}

impl Default for LightBank {
    fn default() -> Self {
        Self::new()
    }
}

impl LightBank {
    /// Ambient fill plus the white key light.
    pub fn new() -> Self {
        Self {
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: AMBIENT_INTENSITY,
            points: vec![PointLight {
                position: Vec3::from_array(KEY_LIGHT_POSITION),
                color: [1.0, 1.0, 1.0],
                intensity: KEY_LIGHT_INTENSITY,
                range: KEY_LIGHT_RANGE,
                decay: LIGHT_DECAY,
            }],
        }
    }

    pub fn push(&mut self, light: PointLight) {
        self.points.push(light);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// One flicker step: lights at the low level jump high, everything else
    /// (including lights that never flickered yet) drops to the low level.
    pub fn toggle_flicker(&mut self) {
        for light in &mut self.points {
            light.intensity = if light.intensity == FLICKER_LOW {
                FLICKER_HIGH
            } else {
                FLICKER_LOW
            };
        }
    }
}
