//! Triangle meshes for the scene's primitive shapes.
//!
//! All meshes are centered on the local origin. Cones and cylinders span
//! `[-height / 2, height / 2]` on Y with the cone apex at the top.

use crate::world::Shape;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    fn push(&mut self, v: Vertex) -> u32 {
        self.vertices.push(v);
        (self.vertices.len() - 1) as u32
    }

    fn tri(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Fan cap at height `y`, facing `+Y` when `up` is set.
    fn cap(&mut self, radius: f32, y: f32, segments: u32, up: bool) {
        let normal = if up { Vec3::Y } else { Vec3::NEG_Y };
        let center = self.push(Vertex::new(Vec3::new(0.0, y, 0.0), normal));
        let first = self.vertices.len() as u32;
        for i in 0..=segments {
            let a = TAU * i as f32 / segments as f32;
            self.push(Vertex::new(
                Vec3::new(radius * a.cos(), y, radius * a.sin()),
                normal,
            ));
        }
        for i in 0..segments {
            let (p0, p1) = (first + i, first + i + 1);
            if up {
                self.tri(center, p1, p0);
            } else {
                self.tri(center, p0, p1);
            }
        }
    }
}

impl Shape {
    pub fn mesh(&self) -> MeshData {
        match *self {
            Shape::Cone {
                radius,
                height,
                segments,
            } => cone(radius, height, segments),
            Shape::Cylinder {
                radius,
                height,
                segments,
            } => cylinder(radius, height, segments),
            Shape::Sphere { radius, segments } => sphere(radius, segments, segments),
            Shape::Cuboid { size } => cuboid(size),
        }
    }
}

/// Faceted cone: every side triangle gets its own normal.
pub fn cone(radius: f32, height: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let half = height * 0.5;
    let apex = Vec3::new(0.0, half, 0.0);
    let mut mesh = MeshData::default();
    for i in 0..segments {
        let a0 = TAU * i as f32 / segments as f32;
        let a1 = TAU * (i + 1) as f32 / segments as f32;
        let mid = 0.5 * (a0 + a1);
        let normal = Vec3::new(height * mid.cos(), radius, height * mid.sin()).normalize();
        let p0 = Vec3::new(radius * a0.cos(), -half, radius * a0.sin());
        let p1 = Vec3::new(radius * a1.cos(), -half, radius * a1.sin());
        let ia = mesh.push(Vertex::new(apex, normal));
        let i0 = mesh.push(Vertex::new(p0, normal));
        let i1 = mesh.push(Vertex::new(p1, normal));
        mesh.tri(ia, i1, i0);
    }
    mesh.cap(radius, -half, segments, false);
    mesh
}

pub fn cylinder(radius: f32, height: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let half = height * 0.5;
    let mut mesh = MeshData::default();
    for i in 0..=segments {
        let a = TAU * i as f32 / segments as f32;
        let n = Vec3::new(a.cos(), 0.0, a.sin());
        mesh.push(Vertex::new(n * radius + Vec3::Y * half, n));
        mesh.push(Vertex::new(n * radius - Vec3::Y * half, n));
    }
    for i in 0..segments {
        let top0 = 2 * i;
        let bot0 = top0 + 1;
        let top1 = top0 + 2;
        let bot1 = top0 + 3;
        mesh.tri(top0, top1, bot0);
        mesh.tri(top1, bot1, bot0);
    }
    mesh.cap(radius, half, segments, true);
    mesh.cap(radius, -half, segments, false);
    mesh
}

/// Latitude/longitude sphere with smooth normals.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData::default();
    for ring in 0..=hs {
        let phi = PI * ring as f32 / hs as f32;
        let y = phi.cos();
        let ring_radius = phi.sin();
        for seg in 0..=ws {
            let theta = TAU * seg as f32 / ws as f32;
            let n = Vec3::new(ring_radius * theta.cos(), y, ring_radius * theta.sin());
            mesh.push(Vertex::new(n * radius, n));
        }
    }
    for ring in 0..hs {
        for seg in 0..ws {
            let current = ring * (ws + 1) + seg;
            let next = current + ws + 1;
            mesh.tri(current, current + 1, next);
            mesh.tri(current + 1, next + 1, next);
        }
    }
    mesh
}

/// Axis-aligned cube with one quad per face so each face keeps a hard normal.
pub fn cuboid(size: f32) -> MeshData {
    let h = size * 0.5;
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    ];
    let mut mesh = MeshData::default();
    for (normal, u, v) in faces {
        let c = normal * h;
        let a = mesh.push(Vertex::new(c - u * h - v * h, normal));
        let b = mesh.push(Vertex::new(c + u * h - v * h, normal));
        let d = mesh.push(Vertex::new(c + u * h + v * h, normal));
        let e = mesh.push(Vertex::new(c - u * h + v * h, normal));
        mesh.tri(a, b, d);
        mesh.tri(a, d, e);
    }
    mesh
}
