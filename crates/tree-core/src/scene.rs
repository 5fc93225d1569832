//! The whole mutable state of the scene, built once and ticked per frame.

use crate::builders::{self, Snowflake, Tree};
use crate::camera::{CameraRig, CameraView, Projection, Viewport};
use crate::constants::{CLEAR_COLOR, SNOW_RESPAWN_Y};
use crate::controls::OrbitControls;
use crate::lights::LightBank;
use crate::world::{Kind, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Counts logged at startup and checked by tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneSummary {
    pub layers: usize,
    pub ornaments: usize,
    pub fairy_lights: usize,
    pub gifts: usize,
    pub snowflakes: usize,
}

pub struct SceneState {
    pub world: World,
    pub lights: LightBank,
    pub tree: Tree,
    pub snow: Vec<Snowflake>,
    pub camera: CameraRig,
    pub controls: OrbitControls,
    pub projection: Projection,
    pub viewport: Viewport,
    pub clear_color: [f32; 3],
    rng: StdRng,
}

impl SceneState {
    /// Build the full scene. All randomness for construction and for later
    /// snowflake respawns comes from `rng`.
    pub fn build(mut rng: StdRng) -> Self {
        let mut world = World::new();
        let mut lights = LightBank::new();
        let tree = builders::build_tree(&mut rng, &mut world, &mut lights);
        builders::build_gifts(&mut rng, &mut world);
        let snow = builders::build_snowflakes(&mut rng, &mut world);
        log::debug!(
            "scene built: {} entities, {} point lights",
            world.len(),
            lights.len()
        );
        Self {
            world,
            lights,
            tree,
            snow,
            camera: CameraRig::default(),
            controls: OrbitControls::default(),
            projection: Projection::default(),
            viewport: Viewport::new(1, 1),
            clear_color: CLEAR_COLOR,
            rng,
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::build(StdRng::seed_from_u64(seed))
    }

    pub fn summary(&self) -> SceneSummary {
        SceneSummary {
            layers: self.tree.layers.len(),
            ornaments: self.world.count(Kind::Ornament),
            // first light is the key light
            fairy_lights: self.lights.len().saturating_sub(1),
            gifts: self.world.spins.len(),
            snowflakes: self.snow.len(),
        }
    }

    /// One animation frame.
    pub fn tick(&mut self) {
        self.camera.advance();
        self.world.apply_spins();
        self.fall_snow();
        let orbit_distance = self.camera.eye().distance(self.camera.look_at);
        self.controls.update(orbit_distance);
    }

    fn fall_snow(&mut self) {
        for flake in &self.snow {
            let t = self.world.transform_mut(flake.entity);
            t.translation.y -= flake.velocity;
            if t.translation.y < SNOW_RESPAWN_Y {
                t.translation = builders::snow_position(&mut self.rng);
            }
        }
    }

    /// Camera for the current frame: orbit position, then interactive offsets.
    pub fn camera_view(&self) -> CameraView {
        self.controls.apply(CameraView {
            eye: self.camera.eye(),
            target: self.camera.look_at,
        })
    }

    /// Track the drawing-buffer size; `true` when the projection changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        self.viewport.resize(width, height)
    }
}
