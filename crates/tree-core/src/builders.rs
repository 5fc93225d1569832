//! Procedural construction of the static scene content.
//!
//! Every random parameter is drawn here, once. The animation tick only ever
//! re-draws snowflake positions.

use crate::color::hsl_to_rgb;
use crate::constants::*;
use crate::lights::{LightBank, PointLight};
use crate::random::{rand_angle, rand_float, rand_in, rand_int, rand_rgb, rand_spread};
use crate::world::{Kind, Material, Shape, Spin, Transform, World};
use crate::Entity;
use glam::Vec3;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TreeLayer {
    pub entity: Entity,
    pub radius: f32,
    pub height: f32,
    pub center_y: f32,
}

impl TreeLayer {
    pub fn bottom(&self) -> f32 {
        self.center_y - self.height * 0.5
    }

    pub fn top(&self) -> f32 {
        self.center_y + self.height * 0.5
    }
}

#[derive(Clone, Debug)]
pub struct Tree {
    pub layers: SmallVec<[TreeLayer; 5]>,
    pub base_height: f32,
    pub base_radius: f32,
    pub trunk: Entity,
    pub topper: Entity,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Snowflake {
    pub entity: Entity,
    /// Units per frame; fixed for the snowflake's lifetime.
    pub velocity: f32,
}

/// Stacked cone layers with trunk and topper, decorated with ornaments and
/// fairy lights layer by layer.
pub fn build_tree<R: Rng + ?Sized>(
    rng: &mut R,
    world: &mut World,
    lights: &mut LightBank,
) -> Tree {
    let layer_count = rand_int(rng, TREE_LAYERS_MIN, TREE_LAYERS_MAX);
    let base_height = rand_in(rng, TREE_HEIGHT_RANGE);
    let base_radius = rand_in(rng, TREE_RADIUS_RANGE);
    let layer_height = base_height / layer_count as f32;
    let material = Material::flat([0.0, rand_in(rng, TREE_GREEN_RANGE), 0.0]);

    let mut layers = SmallVec::new();
    let mut cumulative = 0.0_f32;
    for i in 0..layer_count {
        let radius = base_radius * (1.0 - i as f32 * LAYER_RADIUS_STEP);
        let center_y = cumulative + layer_height * 0.5 - LAYER_OVERLAP;
        cumulative += layer_height - LAYER_OVERLAP;
        let entity = world.spawn(
            Transform::at(Vec3::new(0.0, center_y, 0.0)),
            Shape::Cone {
                radius,
                height: layer_height,
                segments: CONE_SEGMENTS,
            },
            material,
            Kind::TreeLayer,
        );
        let layer = TreeLayer {
            entity,
            radius,
            height: layer_height,
            center_y,
        };
        add_ornaments(rng, world, &layer);
        add_fairy_lights(rng, lights, &layer);
        layers.push(layer);
    }

    // Trunk is centred one overlap plus half its height below the stack top.
    let trunk_height = base_height * TRUNK_HEIGHT_FRACTION;
    let trunk = world.spawn(
        Transform::at(Vec3::new(
            0.0,
            cumulative - trunk_height * 0.5 - LAYER_OVERLAP,
            0.0,
        )),
        Shape::Cylinder {
            radius: base_radius * TRUNK_RADIUS_FRACTION,
            height: trunk_height,
            segments: CONE_SEGMENTS,
        },
        Material::phong(TRUNK_COLOR),
        Kind::Trunk,
    );

    let topper = world.spawn(
        Transform {
            translation: Vec3::new(0.0, cumulative + TOPPER_LIFT, 0.0),
            yaw: (rand_int(rng, 0, 360) as f32).to_radians(),
            scale: 1.0,
        },
        Shape::Sphere {
            radius: TOPPER_RADIUS,
            segments: 16,
        },
        Material::unlit(TOPPER_COLOR),
        Kind::Topper,
    );

    Tree {
        layers,
        base_height,
        base_radius,
        trunk,
        topper,
    }
}

/// Random point inside a layer's bounding cylinder, `inset` short of the rim.
fn point_in_layer<R: Rng + ?Sized>(rng: &mut R, layer: &TreeLayer, inset: f32) -> Vec3 {
    let theta = rand_angle(rng);
    let radius = rand_float(rng, LAYER_MIN_RADIUS, layer.radius - inset);
    let half = layer.height * 0.5;
    let y = rand_float(
        rng,
        -half + LAYER_VERTICAL_MARGIN,
        half - LAYER_VERTICAL_MARGIN,
    );
    Vec3::new(
        radius * theta.cos(),
        y + layer.center_y,
        radius * theta.sin(),
    )
}

pub fn add_ornaments<R: Rng + ?Sized>(rng: &mut R, world: &mut World, layer: &TreeLayer) {
    let count = rand_int(rng, ORNAMENTS_PER_LAYER.0, ORNAMENTS_PER_LAYER.1);
    for _ in 0..count {
        let color = rand_rgb(rng);
        let translation = point_in_layer(rng, layer, ORNAMENT_INSET);
        let scale = rand_in(rng, ORNAMENT_SCALE_RANGE);
        world.spawn(
            Transform {
                translation,
                yaw: 0.0,
                scale,
            },
            Shape::Sphere {
                radius: ORNAMENT_RADIUS,
                segments: 16,
            },
            Material::phong(color).with_glow(ORNAMENT_GLOW),
            Kind::Ornament,
        );
    }
}

pub fn add_fairy_lights<R: Rng + ?Sized>(
    rng: &mut R,
    lights: &mut LightBank,
    layer: &TreeLayer,
) {
    let count = rand_int(rng, FAIRY_LIGHTS_PER_LAYER.0, FAIRY_LIGHTS_PER_LAYER.1);
    for _ in 0..count {
        let color = hsl_to_rgb(rng.gen(), 1.0, 0.5);
        let position = point_in_layer(rng, layer, FAIRY_LIGHT_INSET);
        lights.push(PointLight {
            position,
            color,
            intensity: FAIRY_LIGHT_INTENSITY,
            range: FAIRY_LIGHT_RANGE,
            decay: LIGHT_DECAY,
        });
    }
}

/// Spinning boxes scattered around the tree. Each gets a `Spin` component.
pub fn build_gifts<R: Rng + ?Sized>(rng: &mut R, world: &mut World) -> usize {
    let count = rand_int(rng, GIFTS.0, GIFTS.1);
    for _ in 0..count {
        let color = rand_rgb(rng);
        let radius = rand_in(rng, GIFT_RADIUS_RANGE);
        let theta = rand_angle(rng);
        let height = rand_in(rng, GIFT_HEIGHT_RANGE);
        let scale = rand_in(rng, GIFT_SCALE_RANGE);
        let gift = world.spawn(
            Transform {
                translation: Vec3::new(radius * theta.cos(), height, radius * theta.sin()),
                yaw: 0.0,
                scale,
            },
            Shape::Cuboid { size: 1.0 },
            Material::phong(color),
            Kind::Gift,
        );
        let speed = rand_in(rng, GIFT_SPIN_RANGE);
        let direction = if rng.gen::<f32>() > 0.5 { 1.0 } else { -1.0 };
        world.spins.insert(gift, Spin { speed, direction });
    }
    count as usize
}

pub fn snow_position<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(
        rand_spread(rng, SNOW_SPREAD),
        rand_in(rng, SNOW_HEIGHT_RANGE),
        rand_spread(rng, SNOW_SPREAD),
    )
}

pub fn build_snowflakes<R: Rng + ?Sized>(rng: &mut R, world: &mut World) -> Vec<Snowflake> {
    (0..SNOWFLAKE_COUNT)
        .map(|_| {
            let entity = world.spawn(
                Transform::at(snow_position(rng)),
                Shape::Sphere {
                    radius: SNOWFLAKE_RADIUS,
                    segments: SNOWFLAKE_SEGMENTS,
                },
                Material::unlit([1.0, 1.0, 1.0]),
                Kind::Snowflake,
            );
            Snowflake {
                entity,
                velocity: rand_in(rng, SNOW_VELOCITY_RANGE),
            }
        })
        .collect()
}
