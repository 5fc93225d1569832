// Scene tuning constants shared by the builders, the animation tick and the
// web renderer. Ranges are half-open [min, max) unless noted as inclusive.

// Tree
pub const TREE_LAYERS_MIN: u32 = 3; // inclusive
pub const TREE_LAYERS_MAX: u32 = 5; // inclusive
pub const TREE_HEIGHT_RANGE: (f32, f32) = (20.0, 25.0);
pub const TREE_RADIUS_RANGE: (f32, f32) = (10.0, 15.0);
pub const TREE_GREEN_RANGE: (f32, f32) = (0.5, 1.0);
pub const LAYER_OVERLAP: f32 = 1.5; // each layer sinks this far into the one below
pub const LAYER_RADIUS_STEP: f32 = 0.15; // fraction of base radius lost per layer
pub const CONE_SEGMENTS: u32 = 32;

pub const TRUNK_HEIGHT_FRACTION: f32 = 0.2;
pub const TRUNK_RADIUS_FRACTION: f32 = 0.2;
pub const TRUNK_COLOR: [f32; 3] = [0.545, 0.271, 0.075]; // #8B4513

pub const TOPPER_RADIUS: f32 = 1.5;
pub const TOPPER_LIFT: f32 = 1.5; // above the top of the highest layer
pub const TOPPER_COLOR: [f32; 3] = [1.0, 0.843, 0.0]; // #FFD700

// Ornaments
pub const ORNAMENTS_PER_LAYER: (u32, u32) = (5, 10); // inclusive
pub const ORNAMENT_RADIUS: f32 = 0.3;
pub const ORNAMENT_SCALE_RANGE: (f32, f32) = (0.8, 1.2);
pub const ORNAMENT_GLOW: f32 = 0.2;
pub const ORNAMENT_INSET: f32 = 1.0; // keeps ornaments inside the cone rim

// Fairy lights
pub const FAIRY_LIGHTS_PER_LAYER: (u32, u32) = (10, 20); // inclusive
pub const FAIRY_LIGHT_INTENSITY: f32 = 0.5;
pub const FAIRY_LIGHT_RANGE: f32 = 5.0;
pub const FAIRY_LIGHT_INSET: f32 = 0.5;

// Shared placement margins within a layer
pub const LAYER_MIN_RADIUS: f32 = 0.5;
pub const LAYER_VERTICAL_MARGIN: f32 = 0.5;

// Gifts
pub const GIFTS: (u32, u32) = (20, 30); // inclusive
pub const GIFT_RADIUS_RANGE: (f32, f32) = (5.0, 15.0);
pub const GIFT_HEIGHT_RANGE: (f32, f32) = (0.0, 20.0);
pub const GIFT_SCALE_RANGE: (f32, f32) = (0.5, 1.5);
pub const GIFT_SPIN_RANGE: (f32, f32) = (0.005, 0.02); // radians per frame

// Snow
pub const SNOWFLAKE_COUNT: usize = 200;
pub const SNOWFLAKE_RADIUS: f32 = 0.1;
pub const SNOWFLAKE_SEGMENTS: u32 = 8;
pub const SNOW_SPREAD: f32 = 100.0; // horizontal extent centered on the origin
pub const SNOW_HEIGHT_RANGE: (f32, f32) = (50.0, 100.0);
pub const SNOW_VELOCITY_RANGE: (f32, f32) = (0.1, 0.5); // units per frame
pub const SNOW_RESPAWN_Y: f32 = 0.1;

// Lighting rig
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const KEY_LIGHT_POSITION: [f32; 3] = [50.0, 50.0, 50.0];
pub const KEY_LIGHT_INTENSITY: f32 = 1.0;
pub const KEY_LIGHT_RANGE: f32 = 100.0;
pub const LIGHT_DECAY: f32 = 2.0;
pub const MAX_POINT_LIGHTS: usize = 128; // must match the array length in scene.wgsl

// Secret-mode flicker levels
pub const FLICKER_LOW: f32 = 1.0;
pub const FLICKER_HIGH: f32 = 5.0;

// Ambient mode
pub const SECRET_MODE_CHANCE: f64 = 0.1;

// Camera
pub const CAMERA_RADIUS: f32 = 50.0;
pub const CAMERA_INCLINATION_DEG: f32 = 70.0; // measured from +Y
pub const CAMERA_SPEED: f32 = 0.001; // radians per frame
pub const CAMERA_LOOK_AT: [f32; 3] = [0.0, 5.0, 0.0];
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Interactive controls
pub const CONTROLS_DAMPING: f32 = 0.05;
pub const CONTROLS_ZOOM_SPEED: f32 = 0.001; // log2 distance per wheel pixel
pub const CONTROLS_PAN_SPEED: f32 = 0.05; // world units per pointer pixel
pub const CONTROLS_MIN_DISTANCE: f32 = 10.0;
pub const CONTROLS_MAX_DISTANCE: f32 = 200.0;

// Background
pub const CLEAR_COLOR: [f32; 3] = [0.039, 0.039, 0.235]; // #0A0A3C
