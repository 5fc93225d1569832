pub mod ambient;
pub mod builders;
pub mod camera;
pub mod color;
pub mod constants;
pub mod controls;
pub mod lights;
pub mod mesh;
pub mod random;
pub mod scene;
pub mod world;

pub use ambient::AmbientMode;
pub use builders::{Snowflake, Tree, TreeLayer};
pub use camera::{CameraRig, CameraView, Projection, Viewport};
pub use constants::*;
pub use controls::OrbitControls;
pub use lights::{LightBank, PointLight};
pub use mesh::{MeshData, Vertex};
pub use scene::{SceneState, SceneSummary};
pub use world::{Entity, Kind, Material, Shading, Shape, Spin, Transform, World};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
