//! Entity/component storage for the scene.
//!
//! Entities are plain handles allocated in order; the dense components
//! (transform, shape, material, kind) live in parallel arrays indexed by the
//! handle. Sparse per-entity animation data lives in its own table so the
//! renderer never sees it.

use fnv::FnvHashMap;
use glam::{Mat4, Quat, Vec3};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity(u32);

impl Entity {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Placement with rotation restricted to yaw about +Y and uniform scale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub yaw: f32,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            yaw: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.yaw),
            self.translation,
        )
    }
}

/// Local-space geometry, centered on the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Cone { radius: f32, height: f32, segments: u32 },
    Cylinder { radius: f32, height: f32, segments: u32 },
    Sphere { radius: f32, segments: u32 },
    Cuboid { size: f32 },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shading {
    /// Lit, one normal per face.
    Flat,
    /// Lit, smooth normals with a specular highlight.
    Phong,
    /// Ignores lights entirely.
    Unlit,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub emissive: f32,
    pub shading: Shading,
    pub shininess: f32,
}

impl Material {
    pub fn phong(color: [f32; 3]) -> Self {
        Self {
            color,
            emissive: 0.0,
            shading: Shading::Phong,
            shininess: 30.0,
        }
    }

    pub fn flat(color: [f32; 3]) -> Self {
        Self {
            shading: Shading::Flat,
            ..Self::phong(color)
        }
    }

    pub fn unlit(color: [f32; 3]) -> Self {
        Self {
            shading: Shading::Unlit,
            ..Self::phong(color)
        }
    }

    pub fn with_glow(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    TreeLayer,
    Trunk,
    Topper,
    Ornament,
    Gift,
    Snowflake,
}

/// Yaw animation for a gift. The tick applies `-(speed * direction)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spin {
    pub speed: f32,
    pub direction: f32,
}

#[derive(Default)]
pub struct World {
    ids: Vec<Entity>,
    transforms: Vec<Transform>,
    shapes: Vec<Shape>,
    materials: Vec<Material>,
    kinds: Vec<Kind>,
    pub spins: FnvHashMap<Entity, Spin>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(
        &mut self,
        transform: Transform,
        shape: Shape,
        material: Material,
        kind: Kind,
    ) -> Entity {
        let e = Entity(self.ids.len() as u32);
        self.ids.push(e);
        self.transforms.push(transform);
        self.shapes.push(shape);
        self.materials.push(material);
        self.kinds.push(kind);
        e
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.ids.iter().copied()
    }

    pub fn transform(&self, e: Entity) -> &Transform {
        &self.transforms[e.index()]
    }

    pub fn transform_mut(&mut self, e: Entity) -> &mut Transform {
        &mut self.transforms[e.index()]
    }

    pub fn shape(&self, e: Entity) -> Shape {
        self.shapes[e.index()]
    }

    pub fn material(&self, e: Entity) -> &Material {
        &self.materials[e.index()]
    }

    pub fn kind(&self, e: Entity) -> Kind {
        self.kinds[e.index()]
    }

    pub fn count(&self, kind: Kind) -> usize {
        self.kinds.iter().filter(|k| **k == kind).count()
    }

    pub fn of_kind(&self, kind: Kind) -> impl Iterator<Item = Entity> + '_ {
        self.ids
            .iter()
            .copied()
            .filter(move |e| self.kinds[e.index()] == kind)
    }

    /// Entities grouped by identical shape, in spawn order. Each group shares
    /// one mesh.
    pub fn shape_groups(&self) -> Vec<(Shape, Vec<Entity>)> {
        let mut groups: Vec<(Shape, Vec<Entity>)> = Vec::new();
        for (e, shape) in self.ids.iter().zip(&self.shapes) {
            match groups.iter_mut().find(|(s, _)| s == shape) {
                Some((_, members)) => members.push(*e),
                None => groups.push((*shape, vec![*e])),
            }
        }
        groups
    }

    /// Rotate every spinning box by its stored speed, with the direction
    /// inverted at apply time.
    pub fn apply_spins(&mut self) {
        for (e, spin) in &self.spins {
            if !matches!(self.shapes[e.index()], Shape::Cuboid { .. }) {
                continue;
            }
            self.transforms[e.index()].yaw -= spin.speed * spin.direction;
        }
    }
}
