/// Page wiring and audio tuning for the web front-end.
///
/// Scene tuning (tree sizes, snow, camera orbit) lives in `tree_core::constants`.
// Host page element ids
pub const CANVAS_ID: &str = "tree-canvas";
pub const BACKGROUND_MUSIC_ID: &str = "background-music";
pub const SECRET_MUSIC_ID: &str = "secret-music";

// Track volumes (0..1)
pub const BACKGROUND_MUSIC_VOLUME: f64 = 0.3;
pub const SECRET_MUSIC_VOLUME: f64 = 0.5;
pub const BACKGROUND_MUSIC_LOOPS: bool = true;
// The secret track plays once and then stays silent.
pub const SECRET_MUSIC_LOOPS: bool = false;

// Secret-mode light flicker period
pub const FLICKER_INTERVAL_MS: i32 = 500;

// Pointer buttons (MouseEvent.button)
pub const PRIMARY_BUTTON: i16 = 0;
pub const SECONDARY_BUTTON: i16 = 2;

// WheelEvent.deltaMode scaling to pixels
pub const WHEEL_LINE_PX: f32 = 16.0;
pub const WHEEL_PAGE_PX: f32 = 800.0;
