/// Host wiring and render tuning for the web front end.
///
/// Simulation tuning lives in `backdrop_core::constants`; these only describe
/// how the scene is attached to the page.

// DOM
pub const CANVAS_ID: &str = "backdrop-canvas";
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
pub const MAGNETIC_DISABLED_ATTR: &str = "data-magnetic-disabled";

// Emitter tick period (ms); the render loop runs on animation frames
pub const TICK_INTERVAL_MS: u32 = 16;

// Frames longer than this (background tab, debugger) advance the clock by this much
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// CSS perspective applied with the magnetic tilt
pub const TILT_PERSPECTIVE_PX: f32 = 600.0;

// Fully transparent so the page shows through
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];

// Initial sprite buffer capacity; grows to the next power of two
pub const INITIAL_SPRITE_CAPACITY: usize = 512;

